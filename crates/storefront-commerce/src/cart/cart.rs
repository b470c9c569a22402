//! Cart and cart entry types.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product in a cart with its quantity.
///
/// A cart holds at most one entry per product, and `quantity` is always at
/// least 1: lowering it to zero removes the entry instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity.
    pub quantity: i64,
}

/// A shopping cart.
///
/// Owned by exactly one session. Entries keep the order in which products
/// were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Returns the cart's total quantity afterwards. Fails without touching
    /// the cart if the product is unknown or out of stock.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId) -> Result<i64, CommerceError> {
        let product = catalog
            .by_id(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;

        if !product.is_available() {
            return Err(CommerceError::OutOfStock(product_id));
        }

        match self.entry_mut(product_id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(1)
                    .ok_or(CommerceError::Overflow)?;
            }
            None => self.entries.push(CartEntry {
                product_id,
                quantity: 1,
            }),
        }

        Ok(self.total_quantity())
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// A quantity of zero or less removes the entry. Products not in the
    /// cart are left alone. Stock is not re-checked and there is no upper
    /// bound. Returns the new total quantity.
    pub fn update(&mut self, product_id: ProductId, quantity: i64) -> i64 {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        if let Some(existing) = self.entry_mut(product_id) {
            existing.quantity = quantity;
        }
        self.total_quantity()
    }

    /// Remove a product from the cart. Idempotent.
    pub fn remove(&mut self, product_id: ProductId) -> i64 {
        self.entries.retain(|e| e.product_id != product_id);
        self.total_quantity()
    }

    /// Remove all items from the cart.
    pub fn clear(&mut self) -> i64 {
        self.entries.clear();
        0
    }

    /// Get total item count (sum of quantities).
    pub fn total_quantity(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |acc, e| acc.saturating_add(e.quantity))
    }

    /// Quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map(|e| e.quantity)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new(ProductId::new(7), "USB-C Hub", Money::from_decimal(19.99)),
            Product::new(ProductId::new(8), "Power Bank", Money::from_cents(2500)),
            Product::new(ProductId::new(9), "Sold Out Speaker", Money::from_cents(4000))
                .with_stock(false),
        ])
        .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();

        for n in 1..=5 {
            assert_eq!(cart.add(&catalog, ProductId::new(7)).unwrap(), n);
        }

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(7)), Some(5));
    }

    #[test]
    fn test_add_unknown_product_leaves_cart_unchanged() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(8)).unwrap();
        let before = cart.clone();

        let err = cart.add(&catalog, ProductId::new(999)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_out_of_stock() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let err = cart.add(&catalog, ProductId::new(9)).unwrap_err();
        assert!(matches!(err, CommerceError::OutOfStock(id) if id == ProductId::new(9)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(8)).unwrap();
        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(8)).unwrap();

        let ids: Vec<u64> = cart.entries().iter().map(|e| e.product_id.get()).collect();
        assert_eq!(ids, vec![8, 7]);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_update_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(8)).unwrap();

        assert_eq!(cart.update(ProductId::new(7), 40), 41);
        assert_eq!(cart.quantity_of(ProductId::new(7)), Some(40));

        assert_eq!(cart.update(ProductId::new(7), 2), 3);
    }

    #[test]
    fn test_update_zero_or_negative_removes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(8)).unwrap();

        assert_eq!(cart.update(ProductId::new(7), 0), 1);
        assert_eq!(cart.quantity_of(ProductId::new(7)), None);

        assert_eq!(cart.update(ProductId::new(8), -3), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_product_is_noop() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();

        assert_eq!(cart.update(ProductId::new(8), 5), 1);
        assert_eq!(cart.quantity_of(ProductId::new(8)), None);
        assert_eq!(cart.update(ProductId::new(8), -1), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(7)).unwrap();

        assert_eq!(cart.remove(ProductId::new(7)), 0);
        assert_eq!(cart.remove(ProductId::new(7)), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.clear(), 0);

        cart.add(&catalog, ProductId::new(7)).unwrap();
        cart.add(&catalog, ProductId::new(8)).unwrap();
        assert_eq!(cart.clear(), 0);
        assert!(cart.entries().is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_cart_round_trips_through_json() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, ProductId::new(7)).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"entries":[{"productId":7,"quantity":1}]}"#);
        assert_eq!(serde_json::from_str::<Cart>(&json).unwrap(), cart);
    }
}
