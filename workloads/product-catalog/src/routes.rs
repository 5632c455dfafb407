//! Route table and link building.

use catalog_core::{detail_query, DetailOptions, FilterState, View};
use edge_sdk::edge_core::{Method, RouteConfig, WorkloadManifest};

pub const WORKLOAD: &str = "product-catalog";

const HANDLER_LANDING: &str = "landing";
const HANDLER_CATALOG: &str = "catalog";
const HANDLER_DETAIL: &str = "detail";

/// A page this workload can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Catalog,
    Detail(u64),
}

impl Page {
    pub fn view(&self) -> View {
        match self {
            Page::Landing => View::Landing,
            Page::Catalog => View::Catalog,
            Page::Detail(_) => View::Detail,
        }
    }
}

/// Outcome of routing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    Page(Page),
    NotFound,
    MethodNotAllowed,
}

pub fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/", HANDLER_LANDING))
        .with_route(RouteConfig::new("/catalog", HANDLER_CATALOG))
        .with_route(RouteConfig::new("/catalog/:id", HANDLER_DETAIL))
}

/// Map a path and method to a page.
///
/// `method` is `None` for methods the platform does not model.
pub fn route(manifest: &WorkloadManifest, method: Option<Method>, path: &str) -> Routed {
    let Some((config, params)) = manifest.resolve(path) else {
        return Routed::NotFound;
    };

    match method {
        Some(m) if config.allows(m) => {}
        _ => return Routed::MethodNotAllowed,
    }

    match config.handler.as_str() {
        HANDLER_LANDING => Routed::Page(Page::Landing),
        HANDLER_CATALOG => Routed::Page(Page::Catalog),
        HANDLER_DETAIL => params
            .get("id")
            .and_then(|id| id.parse().ok())
            .map(|id| Routed::Page(Page::Detail(id)))
            .unwrap_or(Routed::NotFound),
        _ => Routed::NotFound,
    }
}

/// Convert the Spin request method.
pub fn edge_method(method: &spin_sdk::http::Method) -> Option<Method> {
    use spin_sdk::http::Method as Spin;

    match method {
        Spin::Get => Some(Method::Get),
        Spin::Head => Some(Method::Head),
        Spin::Post => Some(Method::Post),
        Spin::Put => Some(Method::Put),
        Spin::Delete => Some(Method::Delete),
        Spin::Patch => Some(Method::Patch),
        Spin::Options => Some(Method::Options),
        _ => None,
    }
}

/// Catalog URL carrying the given filters.
pub fn catalog_href(filters: &FilterState) -> String {
    with_query("/catalog", filters.to_query())
}

/// Detail URL carrying the filters (for back) and the detail selections.
pub fn detail_href(id: u64, filters: &FilterState, options: &DetailOptions) -> String {
    with_query(&format!("/catalog/{}", id), detail_query(filters, options))
}

fn with_query(path: &str, query: String) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Size, SortKey};

    #[test]
    fn test_routes() {
        let m = manifest();
        assert_eq!(route(&m, Some(Method::Get), "/"), Routed::Page(Page::Landing));
        assert_eq!(route(&m, Some(Method::Get), "/catalog"), Routed::Page(Page::Catalog));
        assert_eq!(
            route(&m, Some(Method::Get), "/catalog/12"),
            Routed::Page(Page::Detail(12))
        );
    }

    #[test]
    fn test_unknown_and_malformed_paths() {
        let m = manifest();
        assert_eq!(route(&m, Some(Method::Get), "/cart"), Routed::NotFound);
        assert_eq!(route(&m, Some(Method::Get), "/catalog/abc"), Routed::NotFound);
        assert_eq!(route(&m, Some(Method::Get), "/catalog/-1"), Routed::NotFound);
    }

    #[test]
    fn test_non_get_rejected() {
        let m = manifest();
        assert_eq!(route(&m, Some(Method::Post), "/catalog"), Routed::MethodNotAllowed);
        assert_eq!(route(&m, None, "/"), Routed::MethodNotAllowed);
    }

    #[test]
    fn test_page_views() {
        assert_eq!(Page::Landing.view(), View::Landing);
        assert_eq!(Page::Detail(3).view(), View::Detail);
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(catalog_href(&FilterState::default()), "/catalog");

        let filters = FilterState::new().with_sort(SortKey::Rating);
        assert_eq!(catalog_href(&filters), "/catalog?sort=rating");

        let options = DetailOptions {
            image: 0,
            size: Size::L,
        };
        assert_eq!(
            detail_href(5, &filters, &options),
            "/catalog/5?sort=rating&size=L"
        );
        assert_eq!(detail_href(5, &FilterState::default(), &DetailOptions::default()), "/catalog/5");
    }
}
