//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Lowest allowed star rating.
pub const MIN_RATING: u8 = 1;
/// Highest allowed star rating.
pub const MAX_RATING: u8 = 5;

/// A product in the catalog.
///
/// Field names follow the catalog file (`inStock`, `isBestSeller`,
/// `blackFridayDeal`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Longer description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Whether the product can currently be added to a cart.
    pub in_stock: bool,
    /// Flagged as a bestseller.
    #[serde(default)]
    pub is_best_seller: bool,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Part of the Black Friday promotion.
    #[serde(default)]
    pub black_friday_deal: bool,
    /// Image URL for the product card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a new in-stock product with a mid rating and no flags set.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            in_stock: true,
            is_best_seller: false,
            rating: 3,
            black_friday_deal: false,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the star rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Set stock availability.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Mark as a bestseller.
    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    /// Mark as part of the Black Friday promotion.
    pub fn black_friday(mut self) -> Self {
        self.black_friday_deal = true;
        self
    }

    /// Check if the product can be purchased.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check the record against catalog invariants.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(format!(
                "product {} has rating {}, expected {}-{}",
                self.id, self.rating, MIN_RATING, MAX_RATING
            ));
        }
        if self.price.is_negative() {
            return Err(format!("product {} has a negative price", self.id));
        }
        if self.price > Money::MAX_PRICE {
            return Err(format!("product {} has a price above {}", self.id, Money::MAX_PRICE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_catalog_fields() {
        let json = r#"{
            "id": 7,
            "name": "USB-C Hub",
            "description": "Seven ports",
            "price": 19.99,
            "inStock": true,
            "isBestSeller": true,
            "rating": 5,
            "blackFridayDeal": false
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.price.amount_cents, 1999);
        assert!(product.in_stock);
        assert!(product.is_best_seller);
        assert!(!product.black_friday_deal);
        assert_eq!(product.description.as_deref(), Some("Seven ports"));
        assert!(product.image.is_none());
    }

    #[test]
    fn test_product_missing_required_field() {
        let json = r#"{"id": 1, "name": "No price", "inStock": true, "rating": 4}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_product_validation() {
        let ok = Product::new(ProductId::new(1), "Cable", Money::from_cents(999));
        assert!(ok.validate().is_ok());

        let bad_rating = ok.clone().with_rating(6);
        assert!(bad_rating.validate().is_err());

        let zero_rating = ok.clone().with_rating(0);
        assert!(zero_rating.validate().is_err());

        let negative = Product::new(ProductId::new(2), "Refund", Money::from_cents(-1));
        assert!(negative.validate().is_err());

        let huge = Product::new(ProductId::new(3), "Yacht", Money::from_decimal(1e30));
        assert!(huge.validate().is_err());
        let ceiling = Product::new(ProductId::new(4), "Island", Money::MAX_PRICE);
        assert!(ceiling.validate().is_ok());
    }
}
