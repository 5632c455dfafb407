//! Section renderers for the product catalog.

mod banner;
mod detail;
mod error;
mod filters;
mod header;
mod landing;
mod rating;
mod related;
mod results;

pub use banner::*;
pub use detail::*;
pub use error::*;
pub use filters::*;
pub use header::*;
pub use landing::*;
pub use rating::*;
pub use related::*;
pub use results::*;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Five-star row with the first `filled` stars lit.
fn render_stars(filled: usize) -> String {
    let mut html = String::from(r#"<span class="stars">"#);
    for i in 0..5 {
        if i < filled {
            html.push_str(r#"<span class="star full">★</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">★</span>"#);
        }
    }
    html.push_str("</span>");
    html
}
