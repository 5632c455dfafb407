//! Site header.

use super::html_escape;

/// Render the site header. On the detail view `back_href` adds the
/// "Back to Products" link.
pub fn render_site_header(back_href: Option<&str>) -> String {
    let back = back_href
        .map(|href| {
            format!(
                r#"<a href="{}" class="back-link" data-action="back">&larr; Back to Products</a>"#,
                html_escape(href)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<header class="site-header" data-section="header">
    <a href="/" class="logo">Products Catalog</a>
    {}
    <nav class="header-nav">
        <a href="/catalog">Shop</a>
    </nav>
</header>"#,
        back
    )
}
