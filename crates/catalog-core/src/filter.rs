//! Catalog filter state and the filter/sort pipeline.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Stock-status selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StockStatus {
    #[default]
    All,
    /// Any stock left.
    InStock,
    /// Some stock, but below the low-stock threshold.
    LowStock,
    /// Nothing left.
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::All,
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::All => "all",
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StockStatus::All),
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::All => "All",
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Check if a product satisfies this selector.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StockStatus::All => true,
            StockStatus::InStock => product.in_stock(),
            StockStatus::LowStock => product.is_low_stock(),
            StockStatus::OutOfStock => product.stock == 0,
        }
    }
}

/// Sort key for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep the order the API returned.
    #[default]
    Popularity,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::Rating => "rating",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "popularity" => Some(SortKey::Popularity),
            "price-low" => Some(SortKey::PriceLowToHigh),
            "price-high" => Some(SortKey::PriceHighToLow),
            "rating" => Some(SortKey::Rating),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::Rating => "Rating",
        }
    }

    /// Sort in place. The sort is stable, so ties keep API order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortKey::Popularity => {}
            SortKey::PriceLowToHigh => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHighToLow => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

/// Everything the filter panel and the sort selector control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    /// Free-text search term.
    pub search: String,
    /// Selected category; `None` means all products.
    pub category: Option<String>,
    pub min_price: f64,
    /// Upper price bound; `None` means unbounded.
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    pub stock: StockStatus,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_price_range(mut self, min: f64, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_stock(mut self, stock: StockStatus) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Reset every filter and the sort key.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop an upper bound that sits at or above the slider ceiling, so a
    /// slider left at its maximum does not hide anything.
    pub fn relax_ceiling(&mut self, ceiling: f64) {
        if self.max_price.is_some_and(|max| max >= ceiling) {
            self.max_price = None;
        }
    }

    /// Check if no filter or sort is active.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check if a product satisfies every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_normalized(product, &self.search.to_lowercase())
    }

    fn matches_normalized(&self, product: &Product, term: &str) -> bool {
        let matches_category = self
            .category
            .as_deref()
            .map(|c| product.category == c)
            .unwrap_or(true);
        let matches_max = self.max_price.map(|max| product.price <= max).unwrap_or(true);
        let matches_rating = self
            .min_rating
            .map(|min| product.rating >= min)
            .unwrap_or(true);

        product.matches_term(term)
            && matches_category
            && product.price >= self.min_price
            && matches_max
            && matches_rating
            && self.stock.matches(product)
    }

    /// Filter and sort, borrowing from the source list without changing it.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let term = self.search.to_lowercase();
        let mut filtered: Vec<&Product> = products
            .iter()
            .filter(|p| self.matches_normalized(p, &term))
            .collect();
        self.sort.sort(&mut filtered);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, category: &str, price: f64, rating: f64, stock: u32) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            description: String::new(),
            category: category.to_string(),
            brand: None,
            price,
            discount_percentage: 0.0,
            rating,
            stock,
            thumbnail: String::new(),
            images: Vec::new(),
            reviews: Vec::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "beauty", 9.99, 4.9, 5),
            product(2, "furniture", 1899.99, 3.1, 60),
            product(3, "beauty", 19.5, 2.4, 0),
            product(4, "groceries", 2.29, 4.1, 120),
            product(5, "beauty", 9.99, 4.5, 30),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_keeps_everything_in_order() {
        let products = sample();
        let state = FilterState::new();
        assert!(state.is_default());
        assert_eq!(ids(&state.apply(&products)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let products = sample();
        let state = FilterState::new()
            .with_category("beauty")
            .with_stock(StockStatus::InStock)
            .with_min_rating(4.0);
        assert_eq!(ids(&state.apply(&products)), vec![1, 5]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let products = sample();
        let state = FilterState::new().with_price_range(9.99, Some(19.5));
        assert_eq!(ids(&state.apply(&products)), vec![1, 3, 5]);
    }

    #[test]
    fn test_stock_selectors() {
        let products = sample();
        let low = FilterState::new().with_stock(StockStatus::LowStock);
        assert_eq!(ids(&low.apply(&products)), vec![1, 5]);

        let out = FilterState::new().with_stock(StockStatus::OutOfStock);
        assert_eq!(ids(&out.apply(&products)), vec![3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample();
        let state = FilterState::new().with_search("ITEM 4");
        assert_eq!(ids(&state.apply(&products)), vec![4]);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let products = sample();
        let padded = FilterState::new().with_search(" item 4");
        assert!(padded.apply(&products).is_empty());

        let blank = FilterState::new().with_search(" ");
        assert_eq!(ids(&blank.apply(&products)), vec![1, 2, 3, 4, 5]);
        assert!(!FilterState::new().with_search("  ").matches(&products[0]));
    }

    #[test]
    fn test_sort_orders() {
        let products = sample();

        let asc = FilterState::new().with_sort(SortKey::PriceLowToHigh);
        assert_eq!(ids(&asc.apply(&products)), vec![4, 1, 5, 3, 2]);

        let desc = FilterState::new().with_sort(SortKey::PriceHighToLow);
        assert_eq!(ids(&desc.apply(&products)), vec![2, 3, 1, 5, 4]);

        let rating = FilterState::new().with_sort(SortKey::Rating);
        assert_eq!(ids(&rating.apply(&products)), vec![1, 5, 4, 2, 3]);
    }

    #[test]
    fn test_clear_resets_sort_too() {
        let mut state = FilterState::new()
            .with_search("item")
            .with_category("beauty")
            .with_sort(SortKey::Rating);
        state.clear();
        assert!(state.is_default());
        assert_eq!(state.sort, SortKey::Popularity);
    }

    #[test]
    fn test_relax_ceiling() {
        let mut at_ceiling = FilterState::new().with_price_range(0.0, Some(2000.0));
        at_ceiling.relax_ceiling(2000.0);
        assert!(at_ceiling.is_default());

        let mut below = FilterState::new().with_price_range(0.0, Some(150.0));
        below.relax_ceiling(2000.0);
        assert_eq!(below.max_price, Some(150.0));
    }

    #[test]
    fn test_selector_names_round_trip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        for status in StockStatus::ALL {
            assert_eq!(StockStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(SortKey::from_str("newest"), None);
    }
}
