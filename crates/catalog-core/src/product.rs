//! Product data model as returned by the catalog API.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Stock below this count (and above zero) is considered low.
pub const LOW_STOCK_THRESHOLD: u32 = 50;

/// A catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, deserialize_with = "saturating_stock")]
    pub stock: u32,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub date: String,
}

/// Envelope of the product list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    /// Entries that fail to decode are dropped rather than failing the list.
    #[serde(deserialize_with = "lenient_products")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// Negative, fractional or null counts clamp into `u32`.
fn saturating_stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Product(Product),
    Malformed(IgnoredAny),
}

fn lenient_products<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Product>, D::Error> {
    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Product(product) => Some(product),
            Entry::Malformed(_) => None,
        })
        .collect())
}

/// Stock level as shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than 50 units.
    Plenty,
    /// Between 1 and 50 units.
    Limited,
    /// Nothing left.
    Out,
}

impl StockLevel {
    /// CSS class for the stock badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::Plenty => "stock-plenty",
            StockLevel::Limited => "stock-limited",
            StockLevel::Out => "stock-out",
        }
    }
}

impl Product {
    /// Check if the product carries a discount.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Price before the discount was applied.
    ///
    /// Returns `None` when there is no discount or the percentage would
    /// divide by zero.
    pub fn original_price(&self) -> Option<f64> {
        if !self.has_discount() || self.discount_percentage >= 100.0 {
            return None;
        }
        Some(self.price / (1.0 - self.discount_percentage / 100.0))
    }

    /// Case-insensitive match of `term` against title, description and brand.
    ///
    /// `term` must already be lowercased.
    pub fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || self.title.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self
                .brand
                .as_deref()
                .map(|b| b.to_lowercase().contains(term))
                .unwrap_or(false)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < LOW_STOCK_THRESHOLD
    }

    /// Stock badge level for display.
    pub fn stock_level(&self) -> StockLevel {
        if self.stock > LOW_STOCK_THRESHOLD {
            StockLevel::Plenty
        } else if self.stock > 0 {
            StockLevel::Limited
        } else {
            StockLevel::Out
        }
    }

    /// Stock badge text.
    pub fn stock_label(&self) -> String {
        if self.in_stock() {
            format!("{} in stock", self.stock)
        } else {
            "Out of stock".to_string()
        }
    }

    /// Images for the gallery, falling back to the thumbnail.
    pub fn gallery_images(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.thumbnail.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Number of whole stars to fill for the rating.
    pub fn filled_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}
