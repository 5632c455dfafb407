//! Results bar and product grid.

use catalog_core::{DetailOptions, FilterState, Product, SortKey};

use super::{html_escape, render_stars, FILTER_FORM_ID};
use crate::routes::detail_href;

/// Empty-state text shown in place of the grid.
pub const EMPTY_MESSAGE: &str = "No products found";

/// Render "Showing N of M" and the sort selector.
pub fn render_results_bar(shown: usize, total: usize, filters: &FilterState) -> String {
    let options: String = SortKey::ALL
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                if *key == filters.sort { " selected" } else { "" },
                key.display_name()
            )
        })
        .collect();

    format!(
        r#"<div class="results-bar" data-section="results-bar">
    <div class="result-count">Showing <strong>{shown}</strong> of <strong>{total}</strong></div>
    <label class="sort-control">
        <span class="visually-hidden">Sort by</span>
        <select name="sort" form="{form}" onchange="this.form.submit()">{options}</select>
    </label>
</div>"#,
        shown = shown,
        total = total,
        form = FILTER_FORM_ID,
        options = options
    )
}

/// Render the product grid, or the empty state when nothing matched.
pub fn render_results(products: &[&Product], filters: &FilterState) -> String {
    if products.is_empty() {
        return format!(
            r#"<section class="search-results" data-section="results">
    <div class="empty-state">{}</div>
</section>"#,
            EMPTY_MESSAGE
        );
    }

    let cards: String = products
        .iter()
        .map(|p| {
            let href = detail_href(p.id, filters, &DetailOptions::default());
            render_product_card(p, Some(&href))
        })
        .collect();

    format!(
        r#"<section class="search-results" data-section="results">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render one product card. Without `href` the card is not clickable.
pub fn render_product_card(product: &Product, href: Option<&str>) -> String {
    let discount_badge = if product.has_discount() {
        format!(
            r#"<span class="discount-badge">-{:.0}% OFF</span>"#,
            product.discount_percentage
        )
    } else {
        String::new()
    };

    let original_price = product
        .original_price()
        .map(|price| format!(r#"<span class="original-price">${:.2}</span>"#, price))
        .unwrap_or_default();

    let body = format!(
        r#"<div class="product-image">
            <img src="{thumb}" alt="{title}" loading="lazy">
            {badge}
        </div>
        <div class="product-info">
            <h3 class="product-title">{title}</h3>
            <div class="product-rating">
                {stars}
                <span class="rating-value">({rating:.1})</span>
            </div>
            <div class="product-price">
                <span class="price">${price:.2}</span>
                {original}
            </div>
            <span class="stock-badge {stock_class}">{stock_label}</span>
        </div>"#,
        thumb = html_escape(&product.thumbnail),
        title = html_escape(&product.title),
        badge = discount_badge,
        stars = render_stars(product.filled_stars()),
        rating = product.rating,
        price = product.price,
        original = original_price,
        stock_class = product.stock_level().css_class(),
        stock_label = product.stock_label(),
    );

    match href {
        Some(href) => format!(
            r#"<article class="product-card" data-product-id="{}">
        <a href="{}" class="product-link" data-action="select">
        {}
        </a>
</article>"#,
            product.id,
            html_escape(href),
            body
        ),
        None => format!(
            r#"<article class="product-card" data-product-id="{}">
        {}
</article>"#,
            product.id, body
        ),
    }
}
