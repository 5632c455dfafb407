//! Workload configuration.
//!
//! Defaults are compiled in from `catalog.toml`. The endpoint can be
//! overridden per deployment through the `products_url` Spin variable.

use anyhow::{Context, Result};
use serde::Deserialize;

use catalog_core::{RELATED_LIMIT, REVIEWS_SHOWN, THUMBNAIL_LIMIT};
use edge_sdk::edge_observability::{LogFormat, LogLevel};

const EMBEDDED: &str = include_str!("../catalog.toml");

/// Spin variable that overrides `[api].products_url`.
pub const PRODUCTS_URL_VARIABLE: &str = "products_url";

/// Workload configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub catalog: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CatalogConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse catalog config")
    }

    /// Load the embedded defaults, then apply the Spin variable override.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_toml(EMBEDDED)?;
        if let Ok(url) = spin_sdk::variables::get(PRODUCTS_URL_VARIABLE) {
            config.apply_products_url(&url);
        }
        Ok(config)
    }

    /// Replace the endpoint unless `url` is blank.
    pub fn apply_products_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.api.products_url = url.to_string();
        }
    }
}

/// Upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Product list endpoint.
    #[serde(default = "default_products_url")]
    pub products_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            products_url: default_products_url(),
        }
    }
}

fn default_products_url() -> String {
    "https://dummyjson.com/products".to_string()
}

/// Display limits for the catalog and detail views.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Related products shown on the detail view.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Gallery thumbnails shown on the detail view.
    #[serde(default = "default_thumbnail_limit")]
    pub thumbnail_limit: usize,

    /// Reviews listed in the rating section.
    #[serde(default = "default_reviews_shown")]
    pub reviews_shown: usize,

    /// Upper end of the price sliders.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
            thumbnail_limit: default_thumbnail_limit(),
            reviews_shown: default_reviews_shown(),
            price_ceiling: default_price_ceiling(),
        }
    }
}

fn default_related_limit() -> usize {
    RELATED_LIMIT
}

fn default_thumbnail_limit() -> usize {
    THUMBNAIL_LIMIT
}

fn default_reviews_shown() -> usize {
    REVIEWS_SHOWN
}

fn default_price_ceiling() -> f64 {
    2000.0
}

/// Logger settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = CatalogConfig::from_toml(EMBEDDED).unwrap();
        assert_eq!(config.api.products_url, "https://dummyjson.com/products");
        assert_eq!(config.catalog.related_limit, 4);
        assert_eq!(config.catalog.thumbnail_limit, 4);
        assert_eq!(config.catalog.reviews_shown, 2);
        assert_eq!(config.catalog.price_ceiling, 2000.0);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = CatalogConfig::from_toml(
            r#"
[catalog]
related_limit = 8

[logging]
format = "human"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.related_limit, 8);
        assert_eq!(config.catalog.reviews_shown, 2);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.api.products_url, "https://dummyjson.com/products");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let err = CatalogConfig::from_toml("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("catalog config"));
    }

    #[test]
    fn test_products_url_override() {
        let mut config = CatalogConfig::default();
        config.apply_products_url("   ");
        assert_eq!(config.api.products_url, "https://dummyjson.com/products");

        config.apply_products_url("https://mirror.example.com/products");
        assert_eq!(config.api.products_url, "https://mirror.example.com/products");
    }
}
