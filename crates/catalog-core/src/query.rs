//! Query-string codec for filter state and detail options.
//!
//! Default values are omitted when encoding. Values that fail to parse
//! fall back to their defaults.

use url::form_urlencoded;

use crate::detail::{DetailOptions, Size};
use crate::filter::{FilterState, SortKey, StockStatus};

const KEY_SEARCH: &str = "q";
const KEY_CATEGORY: &str = "category";
const KEY_MIN_PRICE: &str = "min_price";
const KEY_MAX_PRICE: &str = "max_price";
const KEY_MIN_RATING: &str = "min_rating";
const KEY_STOCK: &str = "stock";
const KEY_SORT: &str = "sort";
const KEY_IMAGE: &str = "image";
const KEY_SIZE: &str = "size";

/// Category selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

impl FilterState {
    /// Parse filter state from a URL query string (without the `?`).
    pub fn from_query(qs: &str) -> Self {
        let mut state = FilterState::default();

        for (key, raw) in form_urlencoded::parse(qs.as_bytes()) {
            let value = raw.trim();
            match key.as_ref() {
                KEY_SEARCH => state.search = raw.to_string(),
                KEY_CATEGORY => {
                    state.category = match value {
                        "" | ALL_CATEGORIES => None,
                        c => Some(c.to_string()),
                    }
                }
                KEY_MIN_PRICE => state.min_price = parse_price(value).unwrap_or(0.0),
                KEY_MAX_PRICE => state.max_price = parse_price(value),
                KEY_MIN_RATING => state.min_rating = parse_price(value),
                KEY_STOCK => state.stock = StockStatus::from_str(value).unwrap_or_default(),
                KEY_SORT => state.sort = SortKey::from_str(value).unwrap_or_default(),
                _ => {}
            }
        }

        state
    }

    /// Encode as a URL query string (without the `?`).
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut out);
        out.finish()
    }

    fn append_pairs(&self, out: &mut form_urlencoded::Serializer<'_, String>) {
        if !self.search.is_empty() {
            out.append_pair(KEY_SEARCH, &self.search);
        }
        if let Some(category) = &self.category {
            out.append_pair(KEY_CATEGORY, category);
        }
        if self.min_price > 0.0 {
            out.append_pair(KEY_MIN_PRICE, &self.min_price.to_string());
        }
        if let Some(max) = self.max_price {
            out.append_pair(KEY_MAX_PRICE, &max.to_string());
        }
        if let Some(rating) = self.min_rating {
            out.append_pair(KEY_MIN_RATING, &rating.to_string());
        }
        if self.stock != StockStatus::All {
            out.append_pair(KEY_STOCK, self.stock.as_str());
        }
        if self.sort != SortKey::Popularity {
            out.append_pair(KEY_SORT, self.sort.as_str());
        }
    }
}

impl DetailOptions {
    /// Parse gallery and size selection from a URL query string.
    pub fn from_query(qs: &str) -> Self {
        let mut options = DetailOptions::default();

        for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                KEY_IMAGE => options.image = value.parse().unwrap_or(0),
                KEY_SIZE => options.size = Size::from_str(&value).unwrap_or_default(),
                _ => {}
            }
        }

        options
    }
}

/// Encode filter state plus detail options, keeping the filters so the
/// back action can restore the catalog view.
pub fn detail_query(filters: &FilterState, options: &DetailOptions) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    filters.append_pairs(&mut out);
    if options.image > 0 {
        out.append_pair(KEY_IMAGE, &options.image.to_string());
    }
    if options.size != Size::default() {
        out.append_pair(KEY_SIZE, options.size.as_str());
    }
    out.finish()
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let state = FilterState::from_query(
            "q=red+lipstick&category=beauty&min_price=5&max_price=20.5&min_rating=4&stock=low-stock&sort=price-high",
        );

        assert_eq!(state.search, "red lipstick");
        assert_eq!(state.category.as_deref(), Some("beauty"));
        assert_eq!(state.min_price, 5.0);
        assert_eq!(state.max_price, Some(20.5));
        assert_eq!(state.min_rating, Some(4.0));
        assert_eq!(state.stock, StockStatus::LowStock);
        assert_eq!(state.sort, SortKey::PriceHighToLow);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let state = FilterState::from_query("q=+red+&category=+beauty+");
        assert_eq!(state.search, " red ");
        assert_eq!(state.category.as_deref(), Some("beauty"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let state = FilterState::from_query(
            "category=all&min_price=abc&max_price=-3&min_rating=&stock=plenty&sort=newest",
        );
        assert!(state.is_default());
    }

    #[test]
    fn test_default_encodes_empty() {
        assert_eq!(FilterState::default().to_query(), "");
    }

    #[test]
    fn test_encode_then_parse_preserves_state() {
        let state = FilterState::new()
            .with_search("home & garden")
            .with_category("home-decoration")
            .with_price_range(10.0, Some(250.0))
            .with_sort(SortKey::Rating);

        let encoded = state.to_query();
        assert!(encoded.contains("q=home+%26+garden"));
        assert_eq!(FilterState::from_query(&encoded), state);
    }

    #[test]
    fn test_detail_options() {
        let options = DetailOptions::from_query("q=x&image=2&size=XL");
        assert_eq!(options.image, 2);
        assert_eq!(options.size, Size::XL);

        let fallback = DetailOptions::from_query("image=two&size=XXXL");
        assert_eq!(fallback, DetailOptions::default());
    }

    #[test]
    fn test_detail_query_keeps_filters() {
        let filters = FilterState::new().with_category("beauty");
        let options = DetailOptions {
            image: 1,
            size: Size::M,
        };
        assert_eq!(detail_query(&filters, &options), "category=beauty&image=1&size=M");
        assert_eq!(
            detail_query(&filters, &DetailOptions::default()),
            "category=beauty"
        );
    }
}
