//! Rating summary and review presentation helpers.

use chrono::{DateTime, NaiveDate};

use crate::product::{Product, Review};

/// Number of reviews shown on the detail view.
pub const REVIEWS_SHOWN: usize = 2;

/// One bar of the rating distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBar {
    /// Star level (5 down to 1).
    pub stars: u8,
    /// Reviews whose rating floors to `stars`.
    pub count: usize,
    /// Share of all reviews, 0..=100.
    pub percentage: f64,
}

/// Rating distribution over a product's reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingBreakdown {
    pub average: f64,
    pub total_reviews: usize,
    /// Bars from 5 stars down to 1.
    pub bars: Vec<RatingBar>,
}

impl RatingBreakdown {
    pub fn for_product(product: &Product) -> Self {
        let reviews = &product.reviews;
        // An empty list divides by one so every bar reads 0%.
        let divisor = reviews.len().max(1) as f64;

        let bars = (1..=5u8)
            .rev()
            .map(|stars| {
                let count = reviews
                    .iter()
                    .filter(|r| r.rating.floor() == f64::from(stars))
                    .count();
                RatingBar {
                    stars,
                    count,
                    percentage: count as f64 / divisor * 100.0,
                }
            })
            .collect();

        Self {
            average: product.rating,
            total_reviews: reviews.len(),
            bars,
        }
    }
}

impl Review {
    /// Number of stars to fill; a partial star counts as filled.
    pub fn filled_stars(&self) -> usize {
        self.rating.ceil().clamp(0.0, 5.0) as usize
    }

    /// Date formatted like `May 23, 2024`, or the raw value if it does not parse.
    pub fn display_date(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.date) {
            return parsed.format("%b %-d, %Y").to_string();
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return parsed.format("%b %-d, %Y").to_string();
        }
        self.date.clone()
    }
}
