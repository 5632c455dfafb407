//! Promotional banner above the catalog grid.

pub fn render_promo_banner() -> String {
    r#"<section class="promo-banner" data-section="banner">
    <div class="promo-copy">
        <h2>20% OFF ONLY TODAY AND<br>GET SPECIAL GIFT!</h2>
        <p>Today only, enjoy a stylish 20% off and receive an exclusive gift!<br>Elevate your wardrobe now!</p>
    </div>
    <div class="promo-art" aria-hidden="true"></div>
</section>"#
        .to_string()
}
