//! Product catalog domain types and logic.
//!
//! This crate provides everything the catalog browser needs that does not
//! touch the network or HTML:
//!
//! - **Product**: API data model, stock levels, discounts
//! - **Filter**: Filter state and the filter/sort pipeline
//! - **Catalog**: The loaded list, categories, related products
//! - **Detail**: Image gallery and size selection
//! - **Reviews**: Rating breakdown and review dates
//! - **View**: Landing / catalog / detail state machine
//! - **Query**: URL query-string codec for all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_core::prelude::*;
//!
//! let catalog = Catalog::new(response.products);
//! let filters = FilterState::from_query("category=beauty&sort=price-low");
//!
//! for product in catalog.apply(&filters) {
//!     println!("{} ${:.2}", product.title, product.price);
//! }
//! ```

pub mod catalog;
pub mod detail;
pub mod error;
pub mod filter;
pub mod product;
pub mod query;
pub mod reviews;
pub mod view;

pub use catalog::{Catalog, CategoryCount, RELATED_LIMIT};
pub use detail::{DetailOptions, Gallery, Size, THUMBNAIL_LIMIT};
pub use error::CatalogError;
pub use filter::{FilterState, SortKey, StockStatus};
pub use product::{Product, ProductsResponse, Review, StockLevel, LOW_STOCK_THRESHOLD};
pub use query::{detail_query, ALL_CATEGORIES};
pub use reviews::{RatingBar, RatingBreakdown, REVIEWS_SHOWN};
pub use view::{View, ViewRouter};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{Catalog, CategoryCount, RELATED_LIMIT};
    pub use crate::detail::{DetailOptions, Gallery, Size, THUMBNAIL_LIMIT};
    pub use crate::error::CatalogError;
    pub use crate::filter::{FilterState, SortKey, StockStatus};
    pub use crate::product::{Product, ProductsResponse, Review, StockLevel};
    pub use crate::query::{detail_query, ALL_CATEGORIES};
    pub use crate::reviews::{RatingBar, RatingBreakdown, REVIEWS_SHOWN};
    pub use crate::view::{View, ViewRouter};
}
