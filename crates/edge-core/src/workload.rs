//! Workload definition and route resolution.

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::context::RouteParams;

/// Workload manifest - explicit configuration for a deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles.
    pub routes: Vec<RouteConfig>,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Find the first route matching `path`, in declaration order.
    pub fn resolve(&self, path: &str) -> Option<(&RouteConfig, RouteParams)> {
        self.routes
            .iter()
            .find_map(|route| route.matches(path).map(|params| (route, params)))
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> WorkloadManifest {
        WorkloadManifest::new("shop", "0.1.0")
            .with_route(RouteConfig::new("/", "landing"))
            .with_route(RouteConfig::new("/catalog", "catalog"))
            .with_route(RouteConfig::new("/catalog/:id", "detail"))
    }

    #[test]
    fn test_resolve() {
        let manifest = manifest();

        let (route, _) = manifest.resolve("/").unwrap();
        assert_eq!(route.handler, "landing");

        let (route, params) = manifest.resolve("/catalog/5").unwrap();
        assert_eq!(route.handler, "detail");
        assert_eq!(params.get("id").map(String::as_str), Some("5"));

        assert!(manifest.resolve("/checkout").is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WorkloadError::ShellNotSent.to_string(),
            "Shell not sent before sections"
        );
        assert_eq!(
            WorkloadError::StreamError("closed".to_string()).to_string(),
            "Streaming error: closed"
        );
    }
}
