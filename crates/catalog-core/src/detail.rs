//! Detail view presentation state: image gallery and size selection.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Maximum number of gallery thumbnails shown.
pub const THUMBNAIL_LIMIT: usize = 4;

/// Size options offered on the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Size {
    #[default]
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == s)
    }
}

/// Selections made on the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailOptions {
    /// Index of the gallery image shown large.
    pub image: usize,
    pub size: Size,
}

/// Image gallery for a single product.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    images: Vec<&'a str>,
    selected: usize,
}

impl<'a> Gallery<'a> {
    /// Build the gallery, selecting `index` (out of range selects the first image).
    pub fn new(product: &'a Product, index: usize) -> Self {
        let images = product.gallery_images();
        let selected = if index < images.len() { index } else { 0 };
        Self { images, selected }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_image(&self) -> &'a str {
        self.images.get(self.selected).copied().unwrap_or_default()
    }

    /// Thumbnails as `(index, url)` pairs, capped at `limit`.
    pub fn thumbnails(&self, limit: usize) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.images.iter().copied().enumerate().take(limit)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(images: &[&str]) -> Product {
        Product {
            id: 3,
            title: "Powder Canister".to_string(),
            description: String::new(),
            category: "beauty".to_string(),
            brand: None,
            price: 14.99,
            discount_percentage: 0.0,
            rating: 3.8,
            stock: 12,
            thumbnail: "thumb.png".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_gallery_selection() {
        let p = product(&["1.png", "2.png", "3.png"]);
        let gallery = Gallery::new(&p, 2);
        assert_eq!(gallery.selected_index(), 2);
        assert_eq!(gallery.selected_image(), "3.png");
    }

    #[test]
    fn test_gallery_out_of_range_selects_first() {
        let p = product(&["1.png", "2.png"]);
        let gallery = Gallery::new(&p, 9);
        assert_eq!(gallery.selected_index(), 0);
        assert_eq!(gallery.selected_image(), "1.png");
    }

    #[test]
    fn test_gallery_thumbnails_capped() {
        let p = product(&["1.png", "2.png", "3.png", "4.png", "5.png"]);
        let gallery = Gallery::new(&p, 0);
        let thumbs: Vec<_> = gallery.thumbnails(THUMBNAIL_LIMIT).collect();
        assert_eq!(thumbs.len(), 4);
        assert_eq!(thumbs[3], (3, "4.png"));
    }

    #[test]
    fn test_gallery_without_images_uses_thumbnail() {
        let p = product(&[]);
        let gallery = Gallery::new(&p, 0);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.selected_image(), "thumb.png");
    }

    #[test]
    fn test_size_parse() {
        assert_eq!(Size::from_str("XXL"), Some(Size::XXL));
        assert_eq!(Size::from_str("xl"), None);
        assert_eq!(Size::default(), Size::S);
    }
}
