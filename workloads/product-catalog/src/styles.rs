//! Stylesheet inlined into the shell head.

pub const CATALOG_STYLES: &str = r##"
:root {
    --primary: #111827;
    --accent: #4f46e5;
    --bg: #f9fafb;
    --card-bg: #ffffff;
    --text: #111827;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --success: #16a34a;
    --warning: #d97706;
    --error: #dc2626;
    --star: #f59e0b;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a { color: inherit; }

.visually-hidden {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0 0 0 0);
}

/* Header */
.site-header {
    display: flex;
    align-items: center;
    gap: 2rem;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo {
    font-size: 1.375rem;
    font-weight: 800;
    text-decoration: none;
}

.back-link {
    color: var(--text-muted);
    text-decoration: none;
}

.header-nav { margin-left: auto; }
.header-nav a { text-decoration: none; }

main {
    max-width: 1400px;
    margin: 0 auto;
    padding: 2rem;
}

/* Landing */
.landing {
    min-height: 80vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.landing h1 { font-size: 3rem; line-height: 1.1; margin-bottom: 1rem; }
.landing-accent { color: var(--accent); }
.landing-description { color: var(--text-muted); max-width: 640px; margin: 0 auto 2rem; }

.feature-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
    margin-bottom: 2.5rem;
}

.feature-card {
    background: var(--card-bg);
    border-radius: 16px;
    padding: 1.5rem;
}

.feature-icon { font-size: 2rem; margin-bottom: 0.5rem; }

.cta-button {
    display: inline-block;
    padding: 0.875rem 2rem;
    background: var(--primary);
    color: white;
    border-radius: 999px;
    text-decoration: none;
    font-weight: 600;
}

/* Banner */
.promo-banner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 2.5rem;
    margin-bottom: 2rem;
    border-radius: 20px;
    background: linear-gradient(120deg, #e0e7ff, #fce7f3);
}

.promo-banner h2 { font-size: 2rem; line-height: 1.2; margin-bottom: 0.75rem; }
.promo-banner p { color: var(--text-muted); }

/* Catalog layout */
.catalog-layout {
    display: grid;
    grid-template-columns: 280px 1fr;
    gap: 2rem;
}

.filter-sidebar {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.5rem;
    height: fit-content;
    position: sticky;
    top: 90px;
}

.filter-heading { margin-bottom: 1rem; }

.filter-group {
    margin-bottom: 1.25rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.filter-title {
    display: block;
    font-size: 0.8125rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-muted);
    margin-bottom: 0.5rem;
}

.filter-group input[type="search"],
.filter-group select {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 8px;
}

.filter-option {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.25rem 0;
    cursor: pointer;
}

.option-count { margin-left: auto; color: var(--text-muted); font-size: 0.875rem; }

.range-label { display: block; font-size: 0.875rem; margin-bottom: 0.5rem; }
.range-label input { width: 100%; }

.apply-filters {
    width: 100%;
    padding: 0.625rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
    margin-bottom: 0.5rem;
}

.clear-filters {
    display: block;
    text-align: center;
    color: var(--text-muted);
    font-size: 0.875rem;
}

.results-bar {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
}

.result-count { color: var(--text-muted); }

.sort-control select {
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
}

/* Product grid */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
}

.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.08); }

.product-link { display: block; text-decoration: none; }

.product-image {
    position: relative;
    aspect-ratio: 1;
    background: #f3f4f6;
}

.product-image img { width: 100%; height: 100%; object-fit: contain; }

.discount-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.125rem 0.5rem;
    background: var(--error);
    color: white;
    font-size: 0.75rem;
    font-weight: 600;
    border-radius: 999px;
}

.product-info { padding: 1rem; }

.product-title {
    font-size: 1rem;
    font-weight: 500;
    margin-bottom: 0.375rem;
    overflow: hidden;
    white-space: nowrap;
    text-overflow: ellipsis;
}

.product-rating { display: flex; align-items: center; gap: 0.25rem; }

.stars, .star.full { color: var(--star); }
.star.empty { color: var(--border); }
.rating-value { color: var(--text-muted); font-size: 0.875rem; }

.product-price { margin: 0.375rem 0; }
.price { font-size: 1.25rem; font-weight: 700; }
.original-price { color: var(--text-muted); text-decoration: line-through; margin-left: 0.5rem; }

.stock-badge {
    display: inline-block;
    padding: 0.125rem 0.5rem;
    border-radius: 999px;
    font-size: 0.75rem;
}

.stock-plenty { background: #dcfce7; color: var(--success); }
.stock-limited { background: #fef3c7; color: var(--warning); }
.stock-out { background: #fee2e2; color: var(--error); }

.empty-state {
    padding: 4rem 2rem;
    text-align: center;
    color: var(--text-muted);
}

/* States */
.loading-state {
    padding: 4rem 2rem;
    text-align: center;
    color: var(--text-muted);
}

.error-state {
    min-height: 60vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    text-align: center;
}

.error-message { color: var(--error); font-size: 1.25rem; }

/* Detail */
.detail-layout {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    margin-bottom: 3rem;
}

.gallery-main {
    aspect-ratio: 1;
    background: #f3f4f6;
    border-radius: 16px;
    margin-bottom: 1rem;
}

.gallery-main img { width: 100%; height: 100%; object-fit: contain; }

.gallery-thumbnails { display: flex; gap: 0.75rem; }

.thumbnail {
    width: 80px;
    height: 80px;
    border: 2px solid transparent;
    border-radius: 10px;
    background: #f3f4f6;
}

.thumbnail.selected { border-color: var(--primary); }
.thumbnail img { width: 100%; height: 100%; object-fit: contain; }

.detail-category { color: var(--text-muted); text-transform: capitalize; }
.detail-title { font-size: 2rem; margin-bottom: 0.5rem; }
.detail-price { font-size: 1.75rem; font-weight: 700; margin-bottom: 0.5rem; }
.delivery-note { color: var(--text-muted); margin-bottom: 1.5rem; }

.size-label { font-weight: 600; margin-bottom: 0.5rem; }
.size-options { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }

.size-option {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    text-decoration: none;
}

.size-option.selected { background: var(--primary); color: white; border-color: var(--primary); }

.add-to-cart {
    width: 100%;
    padding: 0.875rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 999px;
    font-weight: 600;
    cursor: pointer;
    margin-bottom: 1.5rem;
}

.info-panel {
    border-top: 1px solid var(--border);
    padding: 1rem 0;
}

.info-panel summary { font-weight: 600; cursor: pointer; margin-bottom: 0.5rem; }
.shipping-row { display: flex; justify-content: space-between; }
.shipping-title { color: var(--text-muted); }

/* Rating */
.rating-section { margin-bottom: 3rem; }
.rating-section h2 { margin-bottom: 1.5rem; }

.rating-layout {
    display: grid;
    grid-template-columns: 320px 1fr;
    gap: 2rem;
}

.rating-number { font-size: 3rem; font-weight: 700; }
.rating-out-of { font-size: 1.25rem; color: var(--text-muted); }
.review-total { color: var(--text-muted); margin-bottom: 1rem; }

.rating-bar {
    display: grid;
    grid-template-columns: 48px 1fr 32px;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.375rem;
}

.rating-bar-track { height: 8px; background: var(--border); border-radius: 999px; }
.rating-bar-fill { height: 100%; background: var(--primary); border-radius: 999px; }
.rating-count { color: var(--text-muted); font-size: 0.875rem; text-align: right; }

.review {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.25rem;
    margin-bottom: 1rem;
}

.review-header { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
.review-author { font-weight: 600; }
.review-date { color: var(--text-muted); font-size: 0.875rem; }

.related-products h2 { margin-bottom: 1.5rem; }

@media (max-width: 1024px) {
    .catalog-layout,
    .detail-layout,
    .rating-layout {
        grid-template-columns: 1fr;
    }

    .filter-sidebar { position: static; }
}

@media (max-width: 640px) {
    .feature-grid { grid-template-columns: 1fr; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
    .promo-banner { flex-direction: column; text-align: center; }
}
"##;
