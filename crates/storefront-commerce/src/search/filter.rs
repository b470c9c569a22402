//! Named product filters.

use crate::catalog::{Product, MAX_RATING};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Early deals must be priced strictly below this amount.
pub const DEAL_PRICE_CEILING: Money = Money::from_cents(50_00);

/// A catalog filter. Each storefront listing is one of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProductFilter {
    /// Every product.
    #[default]
    All,
    /// Products flagged as bestsellers.
    BestSellers,
    /// Products with a top rating.
    FiveStar,
    /// In-stock Black Friday products under the deal price ceiling.
    EarlyDeals,
    /// Case-insensitive substring match on name or description.
    ///
    /// The needle is expected lowercased and trimmed; an empty needle
    /// matches everything.
    Text(String),
}

impl ProductFilter {
    /// Create a text filter, normalizing the query.
    pub fn text(query: &str) -> Self {
        ProductFilter::Text(query.trim().to_lowercase())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::BestSellers => product.is_best_seller,
            ProductFilter::FiveStar => product.rating == MAX_RATING,
            ProductFilter::EarlyDeals => {
                product.price < DEAL_PRICE_CEILING
                    && product.in_stock
                    && product.black_friday_deal
            }
            ProductFilter::Text(needle) => {
                if needle.is_empty() {
                    return true;
                }
                product.name.to_lowercase().contains(needle.as_str())
                    || product
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(needle.as_str()))
                        .unwrap_or(false)
            }
        }
    }
}
