//! Platform fetch client with dependency tagging.

use edge_core::{RequestId, TimingContext, MARK_FETCH_DONE, MARK_FETCH_START};
use serde::de::DeserializeOwned;
use spin_sdk::http::{Method, Request, Response};

use crate::dependency::DependencyTag;

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl FetchError {
    /// Short machine-readable kind, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http { .. } => "http",
            FetchError::Request(_) => "request",
            FetchError::Deserialization(_) => "deserialization",
        }
    }
}

/// Platform-controlled fetch client.
///
/// Each call issues exactly one request: no retry, no timeout, no caching.
pub struct FetchClient {
    request_id: RequestId,
    timing: TimingContext,
}

impl FetchClient {
    /// Create a new fetch client.
    pub fn new(request_id: RequestId, timing: TimingContext) -> Self {
        Self { request_id, timing }
    }

    /// GET `url` and decode the JSON body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &mut self,
        url: &str,
        tag: DependencyTag,
    ) -> Result<T, FetchError> {
        let req = Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .header("x-request-id", self.request_id.to_string())
            .header("x-dependency", tag.name())
            .build();

        self.timing.mark(MARK_FETCH_START);
        let sent = spin_sdk::http::send::<_, Response>(req).await;
        self.timing.mark(MARK_FETCH_DONE);

        let resp = sent.map_err(|e| FetchError::Request(e.to_string()))?;
        decode_response(url, *resp.status(), resp.body())
    }

    /// Timing marks recorded by this client.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }
}

/// Turn a raw upstream response into `T`.
///
/// Any status of 400 or above is an error, whatever the body says.
pub fn decode_response<T: DeserializeOwned>(
    url: &str,
    status: u16,
    body: &[u8],
) -> Result<T, FetchError> {
    if status >= 400 {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }

    serde_json::from_slice(body).map_err(|e| FetchError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Listing {
        products: Vec<Item>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    const URL: &str = "https://dummyjson.com/products";

    #[test]
    fn test_decode_success() {
        let body = br#"{"products":[{"id":1},{"id":2}],"total":2}"#;
        let listing: Listing = decode_response(URL, 200, body).unwrap();
        assert_eq!(listing.products.len(), 2);
    }

    #[test]
    fn test_http_status_is_error() {
        let err = decode_response::<Listing>(URL, 503, b"{}").unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 503,
                url: URL.to_string()
            }
        );
        assert_eq!(err.to_string(), "HTTP error: 503 for https://dummyjson.com/products");
        assert_eq!(err.kind(), "http");
    }

    #[test]
    fn test_bad_json_is_error() {
        let err = decode_response::<Listing>(URL, 200, b"<html>").unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
        assert_eq!(err.kind(), "deserialization");
    }

    #[test]
    fn test_redirect_status_still_decodes() {
        let listing: Listing = decode_response(URL, 304, br#"{"products":[]}"#).unwrap();
        assert!(listing.products.is_empty());
    }
}
