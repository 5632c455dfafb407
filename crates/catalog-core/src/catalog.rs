//! The loaded product list and everything derived from it.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::filter::FilterState;
use crate::product::Product;

/// Maximum number of related products shown on the detail view.
pub const RELATED_LIMIT: usize = 4;

/// Immutable product list fetched once per page load.
///
/// Cloning is cheap and shares the same products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Arc<[Product]>,
}

/// A category with the number of products in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by id.
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories, sorted ascending.
    pub fn categories(&self) -> Vec<&str> {
        self.category_counts_map().into_keys().collect()
    }

    /// Distinct categories with their product counts, sorted by name.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.category_counts_map()
            .into_iter()
            .map(|(name, count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    fn category_counts_map(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for product in self.products.iter() {
            *counts.entry(product.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Filtered and sorted view over the list.
    pub fn apply(&self, filters: &FilterState) -> Vec<&Product> {
        filters.apply(&self.products)
    }

    /// Products in the same category as `product`, excluding it, in list order.
    pub fn related_to(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
