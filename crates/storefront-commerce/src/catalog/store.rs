//! The read-only product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::ProductFilter;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Shape of the catalog file: the product list lives under `items`.
#[derive(Deserialize)]
struct CatalogFile {
    items: Vec<Product>,
}

/// Immutable list of products, loaded once at startup.
///
/// Products keep the order of the source file; every listing derived from
/// the catalog preserves that order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate ids and invalid records.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate().map_err(CommerceError::InvalidCatalog)?;
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::InvalidCatalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog document (`{"items": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| CommerceError::InvalidCatalog(e.to_string()))?;
        Self::new(file.items)
    }

    /// Read and parse the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| CommerceError::CatalogUnreadable {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&content)
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn by_id(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Products matching `predicate`, in catalog order.
    pub fn filter<F>(&self, predicate: F) -> Vec<&Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products.iter().filter(|p| predicate(p)).collect()
    }

    /// Products matching a named filter, in catalog order.
    pub fn select(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.filter(|p| filter.matches(p))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
