//! Page streaming.
//!
//! Every page sends its shell before anything else. Catalog and detail
//! pages stream a loading placeholder, await the single product fetch, then
//! stream either the error state or the content sections.

use std::fmt::Display;
use std::future::Future;

use futures::Sink;

use catalog_core::{Catalog, DetailOptions, FilterState, Gallery, ViewRouter};
use edge_sdk::edge_core::WorkloadError;
use edge_sdk::edge_data::FetchError;
use edge_sdk::edge_streaming::{HeadContent, Shell, StreamingSink};

use crate::config::DisplayConfig;
use crate::routes::catalog_href;
use crate::sections::{
    render_detail_info, render_fetch_error, render_filters, render_gallery, render_landing,
    render_loading, render_loading_done, render_not_found, render_product_missing,
    render_promo_banner, render_rating, render_related, render_results, render_results_bar,
    render_site_header,
};
use crate::styles::CATALOG_STYLES;

/// What a page ended up showing, for the completion log line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSummary {
    /// Products in the fetched list.
    pub loaded: Option<usize>,
    /// Products rendered in the main grid or related strip.
    pub shown: Option<usize>,
    /// Fetch or lookup failure shown to the user.
    pub error: Option<String>,
}

/// Build the shell. `back_href` adds the back link to the header.
pub fn create_shell(title: &str, back_href: Option<&str>) -> Shell {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Browse, filter and compare products")
        .with_style(CATALOG_STYLES);

    Shell::new(head)
        .with_body_start(format!(
            "<body>\n{}\n<main>\n",
            render_site_header(back_href)
        ))
        .with_body_end("</main>\n</body>\n</html>")
}

pub async fn stream_landing<S, E>(sink: &mut StreamingSink<S, E>) -> Result<PageSummary, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = create_shell("Products Catalog", None);

    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section("landing", &render_landing()).await?;
    sink.send_closing(shell.render_closing()).await?;

    Ok(PageSummary::default())
}

/// Stream the catalog page. `filters` must already be normalized.
pub async fn stream_catalog<S, E, F>(
    sink: &mut StreamingSink<S, E>,
    fetch: F,
    filters: &FilterState,
    display: &DisplayConfig,
) -> Result<PageSummary, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
    F: Future<Output = Result<Catalog, FetchError>>,
{
    let shell = create_shell("Products - Catalog", None);

    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section("loading", &render_loading()).await?;

    let fetched = fetch.await;
    sink.send_section("loading-done", &render_loading_done()).await?;

    let catalog = match fetched {
        Ok(catalog) => catalog,
        Err(e) => return fail(sink, &shell, e).await,
    };

    let matched = catalog.apply(filters);

    sink.send_section("banner", &render_promo_banner()).await?;
    sink.send_section("layout-start", r#"<div class="catalog-layout">"#)
        .await?;
    sink.send_section(
        "filters",
        &render_filters(&catalog, filters, display.price_ceiling),
    )
    .await?;
    sink.send_section("results-start", r#"<div class="catalog-main">"#)
        .await?;
    sink.send_section(
        "results-bar",
        &render_results_bar(matched.len(), catalog.len(), filters),
    )
    .await?;
    sink.send_section("results", &render_results(&matched, filters))
        .await?;
    sink.send_section("layout-end", "</div></div>").await?;
    sink.send_closing(shell.render_closing()).await?;

    Ok(PageSummary {
        loaded: Some(catalog.len()),
        shown: Some(matched.len()),
        error: None,
    })
}

/// Stream the detail page for product `id`.
///
/// The related strip comes from the same fetched list, so the page costs
/// one upstream request like the catalog does.
pub async fn stream_detail<S, E, F>(
    sink: &mut StreamingSink<S, E>,
    fetch: F,
    id: u64,
    filters: &FilterState,
    options: &DetailOptions,
    display: &DisplayConfig,
) -> Result<PageSummary, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
    F: Future<Output = Result<Catalog, FetchError>>,
{
    let back_href = catalog_href(filters);
    let shell = create_shell("Products - Detail", Some(&back_href));

    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section("loading", &render_loading()).await?;

    let fetched = fetch.await;
    sink.send_section("loading-done", &render_loading_done()).await?;

    let catalog = match fetched {
        Ok(catalog) => catalog,
        Err(e) => return fail(sink, &shell, e).await,
    };
    let loaded = catalog.len();

    let mut router = ViewRouter::new();
    let selection = router.enter_catalog().and_then(|()| {
        router.load(catalog);
        router.select(id).map(|_| ())
    });

    let product = match (selection, router.selected()) {
        (Ok(()), Some(product)) => product,
        (Err(e), _) => {
            sink.send_section("error", &render_product_missing(id, &back_href))
                .await?;
            sink.send_closing(shell.render_closing()).await?;
            return Ok(PageSummary {
                loaded: Some(loaded),
                shown: None,
                error: Some(e.to_string()),
            });
        }
        (Ok(()), None) => {
            return Err(WorkloadError::StreamError(format!(
                "Selection of product {} was lost",
                id
            )))
        }
    };

    let gallery = Gallery::new(product, options.image);
    let related = router.related(display.related_limit);

    sink.send_section("layout-start", r#"<div class="detail-layout">"#)
        .await?;
    sink.send_section(
        "gallery",
        &render_gallery(product, &gallery, filters, options, display.thumbnail_limit),
    )
    .await?;
    sink.send_section("detail-info", &render_detail_info(product, filters, options))
        .await?;
    sink.send_section("layout-end", "</div>").await?;
    sink.send_section("rating", &render_rating(product, display.reviews_shown))
        .await?;
    sink.send_section("related", &render_related(&related))
        .await?;
    sink.send_closing(shell.render_closing()).await?;

    Ok(PageSummary {
        loaded: Some(loaded),
        shown: Some(related.len()),
        error: None,
    })
}

pub async fn stream_not_found<S, E>(
    sink: &mut StreamingSink<S, E>,
    path: &str,
) -> Result<PageSummary, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = create_shell("Page not found", None);

    sink.send_shell(&shell.render_opening()).await?;
    sink.send_section("not-found", &render_not_found(path)).await?;
    sink.send_closing(shell.render_closing()).await?;

    Ok(PageSummary::default())
}

/// The fetch failed: show only the error and close the page.
async fn fail<S, E>(
    sink: &mut StreamingSink<S, E>,
    shell: &Shell,
    error: FetchError,
) -> Result<PageSummary, WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let message = error.to_string();
    sink.send_section("error", &render_fetch_error(&message))
        .await?;
    sink.send_closing(shell.render_closing()).await?;

    Ok(PageSummary {
        loaded: None,
        shown: None,
        error: Some(message),
    })
}
