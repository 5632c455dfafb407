//! "You might also like" strip.

use catalog_core::Product;

use super::render_product_card;

/// Render related products as non-clickable cards. Nothing is rendered
/// when the category has no other products.
pub fn render_related(products: &[&Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, None))
        .collect();

    format!(
        r#"<section class="related-products" data-section="related">
    <h2>You might also like</h2>
    <div class="product-grid related-grid">
        {}
    </div>
</section>"#,
        cards
    )
}
