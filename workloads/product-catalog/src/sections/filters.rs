//! Filter sidebar.
//!
//! A plain GET form: every control reflects the current filter state and
//! submitting it re-renders the catalog with the new query string.

use catalog_core::{Catalog, FilterState, StockStatus, ALL_CATEGORIES};

use super::html_escape;

/// Form id shared with the sort selector in the results bar.
pub const FILTER_FORM_ID: &str = "catalog-filters";

/// Render the filter sidebar.
pub fn render_filters(catalog: &Catalog, filters: &FilterState, price_ceiling: f64) -> String {
    format!(
        r#"<aside class="filter-sidebar" data-section="filters">
<form id="{form_id}" action="/catalog" method="GET">
    <h3 class="filter-heading">Filter Products</h3>
    <div class="filter-group">
        <label class="filter-title" for="filter-search">Search</label>
        <input id="filter-search" type="search" name="q" value="{search}" placeholder="Search products...">
    </div>
    <div class="filter-group">
        <h4 class="filter-title">Category</h4>
        {categories}
    </div>
    <div class="filter-group">
        <h4 class="filter-title">Price</h4>
        {price}
    </div>
    <div class="filter-group">
        <h4 class="filter-title">Min Rating</h4>
        {rating}
    </div>
    <div class="filter-group">
        <label class="filter-title" for="filter-stock">Availability</label>
        {stock}
    </div>
    <button type="submit" class="apply-filters">Apply Filters</button>
    <a href="/catalog" class="clear-filters" data-action="clear">Clear All Filters</a>
</form>
</aside>"#,
        form_id = FILTER_FORM_ID,
        search = html_escape(&filters.search),
        categories = render_categories(catalog, filters),
        price = render_price(filters, price_ceiling),
        rating = render_rating_options(filters),
        stock = render_stock(filters),
    )
}

fn render_categories(catalog: &Catalog, filters: &FilterState) -> String {
    let mut html = radio_option(
        "category",
        ALL_CATEGORIES,
        "All Products",
        Some(catalog.len()),
        filters.category.is_none(),
    );

    for entry in catalog.category_counts() {
        let checked = filters.category.as_deref() == Some(entry.name.as_str());
        html.push_str(&radio_option(
            "category",
            &entry.name,
            &entry.name,
            Some(entry.count),
            checked,
        ));
    }

    html
}

fn render_price(filters: &FilterState, ceiling: f64) -> String {
    let max = filters.max_price.unwrap_or(ceiling);
    format!(
        r#"<label class="range-label">Min: ${min}
            <input type="range" name="min_price" min="0" max="{ceiling}" value="{min}" onchange="this.form.submit()">
        </label>
        <label class="range-label">Max: ${max}
            <input type="range" name="max_price" min="0" max="{ceiling}" value="{max}" onchange="this.form.submit()">
        </label>"#,
        min = filters.min_price,
        max = max,
        ceiling = ceiling,
    )
}

fn render_rating_options(filters: &FilterState) -> String {
    let mut html = radio_option("min_rating", "", "Any rating", None, filters.min_rating.is_none());

    for stars in (1..=5u8).rev() {
        let label = format!(
            r#"<span class="stars">{}</span> &amp; up"#,
            "★".repeat(stars as usize)
        );
        let checked = filters.min_rating == Some(f64::from(stars));
        html.push_str(&format!(
            r#"<label class="filter-option">
            <input type="radio" name="min_rating" value="{}"{} onchange="this.form.submit()">
            <span class="option-name">{}</span>
        </label>"#,
            stars,
            if checked { " checked" } else { "" },
            label
        ));
    }

    html
}

fn render_stock(filters: &FilterState) -> String {
    let options: String = StockStatus::ALL
        .iter()
        .map(|status| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                status.as_str(),
                if *status == filters.stock { " selected" } else { "" },
                status.display_name()
            )
        })
        .collect();

    format!(
        r#"<select id="filter-stock" name="stock" onchange="this.form.submit()">{}</select>"#,
        options
    )
}

fn radio_option(
    name: &str,
    value: &str,
    label: &str,
    count: Option<usize>,
    checked: bool,
) -> String {
    let count = count
        .map(|c| format!(r#"<span class="option-count">{}</span>"#, c))
        .unwrap_or_default();

    format!(
        r#"<label class="filter-option">
            <input type="radio" name="{}" value="{}"{} onchange="this.form.submit()">
            <span class="option-name">{}</span>
            {}
        </label>"#,
        name,
        html_escape(value),
        if checked { " checked" } else { "" },
        html_escape(label),
        count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Product;

    fn product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            description: String::new(),
            category: category.to_string(),
            brand: None,
            price: 10.0,
            discount_percentage: 0.0,
            rating: 4.0,
            stock: 3,
            thumbnail: String::new(),
            images: Vec::new(),
            reviews: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "groceries"),
            product(2, "beauty"),
            product(3, "beauty"),
        ])
    }

    #[test]
    fn test_default_state_checks_all() {
        let html = render_filters(&catalog(), &FilterState::default(), 2000.0);
        assert!(html.contains(r#"value="all" checked"#));
        assert!(html.contains(r#"<span class="option-count">3</span>"#));
        assert!(html.contains(r#"<span class="option-count">2</span>"#));
        assert!(html.contains("Min: $0"));
        assert!(html.contains("Max: $2000"));
        assert!(html.contains(r#"<option value="all" selected>All</option>"#));
        assert!(html.contains("Clear All Filters"));
    }

    #[test]
    fn test_categories_sorted() {
        let html = render_filters(&catalog(), &FilterState::default(), 2000.0);
        let beauty = html.find(r#"value="beauty""#).unwrap();
        let groceries = html.find(r#"value="groceries""#).unwrap();
        assert!(beauty < groceries);
    }

    #[test]
    fn test_controls_reflect_state() {
        let filters = FilterState::new()
            .with_search("\"lip\"")
            .with_category("beauty")
            .with_price_range(25.0, Some(300.0))
            .with_min_rating(4.0)
            .with_stock(StockStatus::OutOfStock);
        let html = render_filters(&catalog(), &filters, 2000.0);

        assert!(html.contains(r#"value="&quot;lip&quot;""#));
        assert!(html.contains(r#"value="beauty" checked"#));
        assert!(!html.contains(r#"value="all" checked"#));
        assert!(html.contains("Min: $25"));
        assert!(html.contains("Max: $300"));
        assert!(html.contains(r#"name="min_rating" value="4" checked"#));
        assert!(html.contains(r#"<option value="out-of-stock" selected>"#));
    }
}
