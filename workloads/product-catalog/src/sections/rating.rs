//! Rating summary and latest reviews.

use catalog_core::{Product, RatingBreakdown, Review};

use super::{html_escape, render_stars};

pub fn render_rating(product: &Product, reviews_shown: usize) -> String {
    let breakdown = RatingBreakdown::for_product(product);

    let bars: String = breakdown
        .bars
        .iter()
        .map(|bar| {
            format!(
                r#"<div class="rating-bar" data-stars="{stars}">
            <span class="rating-label"><span class="star full">★</span> {stars}</span>
            <div class="rating-bar-track">
                <div class="rating-bar-fill" style="width: {pct:.0}%"></div>
            </div>
            <span class="rating-count">{count}</span>
        </div>"#,
                stars = bar.stars,
                pct = bar.percentage,
                count = bar.count
            )
        })
        .collect();

    let reviews: String = product
        .reviews
        .iter()
        .take(reviews_shown)
        .map(render_review)
        .collect();

    format!(
        r#"<section class="rating-section" data-section="rating">
    <h2>Rating &amp; Reviews</h2>
    <div class="rating-layout">
        <div class="rating-summary">
            <div class="rating-number">{average:.1}<span class="rating-out-of">/5</span></div>
            <p class="review-total">({total} New Reviews)</p>
            <div class="rating-distribution">
            {bars}
            </div>
        </div>
        <div class="reviews-list">
            {reviews}
        </div>
    </div>
</section>"#,
        average = breakdown.average,
        total = breakdown.total_reviews,
        bars = bars,
        reviews = reviews
    )
}

fn render_review(review: &Review) -> String {
    format!(
        r#"<article class="review">
        <header class="review-header">
            <div>
                <p class="review-author">{author}</p>
                {stars}
            </div>
            <span class="review-date">{date}</span>
        </header>
        <p class="review-body">{comment}</p>
    </article>"#,
        author = html_escape(&review.reviewer_name),
        stars = render_stars(review.filled_stars()),
        date = html_escape(&review.display_date()),
        comment = html_escape(&review.comment)
    )
}
