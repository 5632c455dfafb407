//! Detail view: image gallery and product info.

use catalog_core::{DetailOptions, FilterState, Gallery, Product, Size};

use super::html_escape;
use crate::routes::detail_href;

/// Render the gallery with the selected image large and linked thumbnails.
pub fn render_gallery(
    product: &Product,
    gallery: &Gallery<'_>,
    filters: &FilterState,
    options: &DetailOptions,
    thumbnail_limit: usize,
) -> String {
    let thumbnails: String = gallery
        .thumbnails(thumbnail_limit)
        .map(|(index, url)| {
            let href = detail_href(
                product.id,
                filters,
                &DetailOptions {
                    image: index,
                    ..*options
                },
            );
            let selected = index == gallery.selected_index();
            format!(
                r#"<a href="{}" class="thumbnail{}"{}><img src="{}" alt=""></a>"#,
                html_escape(&href),
                if selected { " selected" } else { "" },
                if selected { r#" aria-current="true""# } else { "" },
                html_escape(url)
            )
        })
        .collect();

    format!(
        r#"<section class="gallery" data-section="gallery">
    <div class="gallery-main">
        <img src="{}" alt="{}">
    </div>
    <div class="gallery-thumbnails">
        {}
    </div>
</section>"#,
        html_escape(gallery.selected_image()),
        html_escape(&product.title),
        thumbnails
    )
}

/// Render category, title, price, size selector and the info panels.
pub fn render_detail_info(product: &Product, filters: &FilterState, options: &DetailOptions) -> String {
    let sizes: String = Size::ALL
        .iter()
        .map(|size| {
            let href = detail_href(
                product.id,
                filters,
                &DetailOptions {
                    size: *size,
                    ..*options
                },
            );
            format!(
                r#"<a href="{}" class="size-option{}">{}</a>"#,
                html_escape(&href),
                if *size == options.size { " selected" } else { "" },
                size.as_str()
            )
        })
        .collect();

    format!(
        r#"<section class="detail-info" data-section="detail-info">
    <p class="detail-category">{category}</p>
    <h1 class="detail-title">{title}</h1>
    <p class="detail-price">${price:.2}</p>
    <p class="delivery-note">Order in 02:30:26 to get next day delivery</p>
    <div class="size-select">
        <p class="size-label">Select Size</p>
        <div class="size-options">{sizes}</div>
    </div>
    <div class="cart-actions">
        <button type="button" class="add-to-cart">Add to Cart</button>
    </div>
    <details class="info-panel" open>
        <summary>Description &amp; Fit</summary>
        <p>{description}</p>
    </details>
    <details class="info-panel" open>
        <summary>Shipping</summary>
        <div class="shipping-row">
            <p class="shipping-title">Delivery Discount</p>
            <p>Disc 50%</p>
        </div>
        <div class="shipping-row">
            <p class="shipping-title">Estimated Delivery</p>
            <p>3-4 Working Days</p>
        </div>
    </details>
</section>"#,
        category = html_escape(&product.category),
        title = html_escape(&product.title),
        price = product.price,
        sizes = sizes,
        description = html_escape(&product.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 5,
            title: "Red Nail Polish".to_string(),
            description: "Rich & glossy.".to_string(),
            category: "beauty".to_string(),
            brand: None,
            price: 8.99,
            discount_percentage: 0.0,
            rating: 3.9,
            stock: 71,
            thumbnail: "t.png".to_string(),
            images: (1..=5).map(|i| format!("{}.png", i)).collect(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_gallery_selection_and_links() {
        let p = product();
        let options = DetailOptions {
            image: 1,
            size: Size::M,
        };
        let gallery = Gallery::new(&p, options.image);
        let html = render_gallery(&p, &gallery, &FilterState::default(), &options, 4);

        assert!(html.contains(r#"<div class="gallery-main">
        <img src="2.png""#));
        assert_eq!(html.matches("class=\"thumbnail").count(), 4);
        assert!(html.contains(r#"href="/catalog/5?image=1&amp;size=M" class="thumbnail selected""#));
        assert!(html.contains(r#"href="/catalog/5?size=M" class="thumbnail""#));
        assert!(!html.contains("5.png"));
    }

    #[test]
    fn test_info_panels() {
        let p = product();
        let html = render_detail_info(&p, &FilterState::default(), &DetailOptions::default());

        assert!(html.contains("$8.99"));
        assert!(html.contains("Rich &amp; glossy."));
        assert_eq!(html.matches("<details class=\"info-panel\" open>").count(), 2);
        assert!(html.contains(r#"<a href="/catalog/5" class="size-option selected">S</a>"#));
        assert!(html.contains(r#"<a href="/catalog/5?size=XXL" class="size-option">XXL</a>"#));
        assert!(html.contains("Add to Cart"));
        assert!(html.contains("3-4 Working Days"));
    }
}
