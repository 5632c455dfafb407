//! Loading, error and not-found states.

use super::html_escape;

/// Placeholder streamed right after the shell, before the fetch resolves.
pub fn render_loading() -> String {
    r#"<div id="catalog-loading" class="loading-state" data-section="loading">Loading products...</div>"#
        .to_string()
}

/// Hide the loading placeholder once the fetch has resolved.
pub fn render_loading_done() -> String {
    "<style>#catalog-loading{display:none}</style>".to_string()
}

/// Full-screen fetch failure. Replaces the whole catalog body.
pub fn render_fetch_error(message: &str) -> String {
    format!(
        r#"<section class="error-state" data-section="error">
    <div class="error-message">Error: {}</div>
</section>"#,
        html_escape(message)
    )
}

/// A detail id that is not in the loaded list.
pub fn render_product_missing(id: u64, back_href: &str) -> String {
    format!(
        r#"<section class="error-state" data-section="error">
    <div class="error-message">Product {} was not found.</div>
    <a href="{}" class="cta-button">Back to Products</a>
</section>"#,
        id,
        html_escape(back_href)
    )
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="error-state" data-section="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="cta-button">Go to the start page</a>
</section>"#,
        html_escape(path)
    )
}
