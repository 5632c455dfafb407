//! Catalog error types.

use thiserror::Error;

/// Errors raised by the catalog view state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with this id in the loaded list.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    /// The product list has not been loaded yet.
    #[error("Catalog not loaded")]
    CatalogNotLoaded,

    /// Transition not allowed from the current view.
    #[error("Invalid view transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}
