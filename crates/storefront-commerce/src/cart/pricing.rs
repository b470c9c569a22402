//! Priced cart views.

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::money::Money;

/// A cart entry joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    /// The product.
    pub product: &'a Product,
    /// Quantity in the cart.
    pub quantity: i64,
    /// Unit price times quantity.
    pub subtotal: Money,
}

/// Cart contents ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView<'a> {
    /// Lines in cart order.
    pub lines: Vec<CartLine<'a>>,
    /// Sum of line subtotals.
    pub total: Money,
    /// Sum of line quantities.
    pub total_quantity: i64,
}

impl CartView<'_> {
    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Cart {
    /// Join the cart with the catalog and price every line.
    ///
    /// Entries whose product is no longer in the catalog are skipped. A
    /// validated catalog price times any cart quantity always fits, so only
    /// the running total can overflow.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> Result<CartView<'a>, CommerceError> {
        let lines = self
            .entries()
            .iter()
            .filter_map(|entry| {
                catalog
                    .by_id(entry.product_id)
                    .map(|product| (product, entry.quantity))
            })
            .map(|(product, quantity)| {
                let subtotal = product
                    .price
                    .try_multiply(quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(CartLine {
                    product,
                    quantity,
                    subtotal,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total =
            Money::try_sum(lines.iter().map(|l| &l.subtotal)).ok_or(CommerceError::Overflow)?;
        let total_quantity = lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity));

        Ok(CartView {
            lines,
            total,
            total_quantity,
        })
    }
}
