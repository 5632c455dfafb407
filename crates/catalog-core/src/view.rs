//! Top-level view state machine.
//!
//! ```text
//! Landing --enter--> Catalog --select--> Detail
//!                       ^                  |
//!                       +------back--------+
//! ```

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::product::Product;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Catalog,
    Detail,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Catalog => "catalog",
            View::Detail => "detail",
        }
    }
}

/// Holds the current view, the selected product and the shared product list.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    view: View,
    selected: Option<u64>,
    catalog: Option<Catalog>,
}

impl ViewRouter {
    /// Start on the landing view with nothing loaded.
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            selected: None,
            catalog: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Landing to catalog.
    pub fn enter_catalog(&mut self) -> Result<(), CatalogError> {
        if self.view != View::Landing {
            return Err(self.invalid(View::Catalog));
        }
        self.view = View::Catalog;
        Ok(())
    }

    /// Store the fetched list. Only the first load is kept.
    pub fn load(&mut self, catalog: Catalog) -> &Catalog {
        self.catalog.get_or_insert(catalog)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Catalog to detail for the clicked product.
    pub fn select(&mut self, id: u64) -> Result<&Product, CatalogError> {
        if self.view != View::Catalog {
            return Err(self.invalid(View::Detail));
        }
        let catalog = self.catalog.as_ref().ok_or(CatalogError::CatalogNotLoaded)?;
        let product = catalog.find(id).ok_or(CatalogError::ProductNotFound(id))?;

        self.view = View::Detail;
        self.selected = Some(id);
        Ok(product)
    }

    /// Detail back to catalog, clearing the selection.
    pub fn back(&mut self) -> Result<(), CatalogError> {
        if self.view != View::Detail {
            return Err(self.invalid(View::Catalog));
        }
        self.view = View::Catalog;
        self.selected = None;
        Ok(())
    }

    /// The selected product while on the detail view.
    pub fn selected(&self) -> Option<&Product> {
        let id = self.selected?;
        self.catalog.as_ref()?.find(id)
    }

    /// Related products for the selection, from the already-loaded list.
    pub fn related(&self, limit: usize) -> Vec<&Product> {
        match (self.selected(), self.catalog.as_ref()) {
            (Some(product), Some(catalog)) => catalog.related_to(product, limit),
            _ => Vec::new(),
        }
    }

    fn invalid(&self, to: View) -> CatalogError {
        CatalogError::InvalidTransition {
            from: self.view.as_str(),
            to: to.as_str(),
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}
