//! Route and workload configuration.

use serde::{Deserialize, Serialize};

use crate::context::{Method, RouteParams};

/// Configuration for a single route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/catalog/:id").
    pub pattern: String,
    /// Handler name.
    pub handler: String,
    /// HTTP methods this route accepts.
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

fn default_methods() -> Vec<String> {
    vec!["GET".to_string()]
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            handler: handler.into(),
            methods: default_methods(),
        }
    }

    /// Check if the route accepts `method`.
    pub fn allows(&self, method: Method) -> bool {
        self.methods.iter().any(|m| m.eq_ignore_ascii_case(method.as_str()))
    }

    /// Match `path` against the pattern, extracting `:name` segments.
    ///
    /// A single trailing slash on the path is ignored.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        let mut pattern_segments = self.pattern.split('/');
        let mut path_segments = path.split('/');
        let mut params = RouteParams::new();

        loop {
            match (pattern_segments.next(), path_segments.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(s)) => {
                    if let Some(name) = p.strip_prefix(':') {
                        if s.is_empty() {
                            return None;
                        }
                        params.insert(name.to_string(), s.to_string());
                    } else if p != s {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}
