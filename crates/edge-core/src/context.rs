//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use http::uri::PathAndQuery;

use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand_simple(),
            rand_simple()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

// LCG step over a shared seed (no std::random in WASM).
fn rand_simple() -> u32 {
    static SEED: AtomicU32 = AtomicU32::new(12345);
    let step = |s: u32| s.wrapping_mul(1103515245).wrapping_add(12345);
    let prev = SEED
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| Some(step(s)))
        .unwrap_or_else(|s| s);
    step(prev)
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted route parameters (e.g., `:id` from `/catalog/:id`).
pub type RouteParams = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed request context passed to workload handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: String,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::generate(),
            method,
            path: path.into(),
            query: String::new(),
            timing: TimingContext::new(),
        }
    }

    /// Create a context from a request target such as `/catalog?q=red`.
    ///
    /// A target that is not a valid origin-form URI is split on the first `?`.
    pub fn from_path_with_query(method: Method, target: &str) -> Self {
        let (path, query) = match target.parse::<PathAndQuery>() {
            Ok(pq) => (pq.path().to_string(), pq.query().unwrap_or("").to_string()),
            Err(_) => match target.split_once('?') {
                Some((path, query)) => (path.to_string(), query.to_string()),
                None => (target.to_string(), String::new()),
            },
        };

        let mut ctx = Self::new(method, path);
        ctx.query = query;
        ctx
    }

    /// Get the raw query string.
    pub fn query_string(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_differ() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(a.to_string().split('-').count(), 3);
    }

    #[test]
    fn test_from_path_with_query() {
        let ctx = RequestContext::from_path_with_query(Method::Get, "/catalog?q=red&sort=rating");
        assert_eq!(ctx.path, "/catalog");
        assert_eq!(ctx.query_string(), "q=red&sort=rating");
        assert_eq!(ctx.method, Method::Get);
    }

    #[test]
    fn test_from_path_without_query() {
        let ctx = RequestContext::from_path_with_query(Method::Get, "/catalog/12");
        assert_eq!(ctx.path, "/catalog/12");
        assert_eq!(ctx.query_string(), "");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Options.as_str(), "OPTIONS");
    }
}
