//! Landing view.

use super::html_escape;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔍",
        title: "Smart Search",
        text: "Find exactly what you need with our advanced search filters",
    },
    Feature {
        icon: "⚡",
        title: "Fast & Smooth",
        text: "Experience lightning-fast loading and smooth animations",
    },
    Feature {
        icon: "✨",
        title: "Premium Quality",
        text: "All products are carefully selected for quality and value",
    },
];

/// Render the landing hero. The only way forward is the enter link.
pub fn render_landing() -> String {
    let features: String = FEATURES
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card">
            <div class="feature-icon">{}</div>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                f.icon,
                html_escape(f.title),
                html_escape(f.text)
            )
        })
        .collect();

    format!(
        r#"<section class="landing" data-section="landing">
    <div class="landing-inner">
        <h1>Welcome to Our<br><span class="landing-accent">Products Catalog</span></h1>
        <p class="landing-description">
            Discover an amazing collection of premium products curated just for you.
            Browse through our extensive catalog with powerful filtering options.
        </p>
        <div class="feature-grid">
        {}
        </div>
        <a href="/catalog" class="cta-button" data-action="enter">Explore Products &rarr;</a>
    </div>
</section>"#,
        features
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_content() {
        let html = render_landing();
        assert!(html.contains("Products Catalog"));
        assert!(html.contains("Fast &amp; Smooth"));
        assert_eq!(html.matches("feature-card").count(), 3);
        assert!(html.contains(r#"href="/catalog""#));
        assert!(html.contains("Explore Products"));
    }
}
