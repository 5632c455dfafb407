//! Product Catalog - landing page, filterable catalog and product detail.
//!
//! This workload demonstrates:
//! - Path-driven views (`/`, `/catalog`, `/catalog/:id`)
//! - Query-string filter state that survives the detail round trip
//! - One upstream fetch per page, with a loading placeholder streamed first
//! - Related products derived from the already-fetched list

mod config;
mod pages;
mod routes;
mod sections;
mod styles;

use anyhow::{anyhow, Result};
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use catalog_core::{Catalog, DetailOptions, FilterState, ProductsResponse};
use edge_sdk::prelude::*;

use config::CatalogConfig;
use pages::{stream_catalog, stream_detail, stream_landing, stream_not_found, PageSummary};
use routes::{edge_method, manifest, route, Page, Routed, WORKLOAD};

/// Product catalog handler.
#[http_component]
async fn handle_catalog(req: IncomingRequest, response_out: ResponseOutparam) {
    if let Err(e) = serve(req, response_out).await {
        eprintln!("{}: request failed: {:#}", WORKLOAD, e);
    }
}

async fn serve(req: IncomingRequest, response_out: ResponseOutparam) -> Result<()> {
    let config = CatalogConfig::load()?;

    let target = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let Some(method) = edge_method(&req.method()) else {
        return respond_empty(response_out, 405);
    };

    let mut ctx = RequestContext::from_path_with_query(method, &target);
    if let Some(id) = incoming_request_id(&req) {
        ctx.request_id = id;
    }
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(ctx.path.clone())
        .with_min_level(config.logging.level)
        .with_format(config.logging.format);

    let routed = route(&manifest(), Some(method), &ctx.path);
    let page = match routed {
        Routed::Page(page) => Some(page),
        Routed::NotFound => None,
        Routed::MethodNotAllowed => {
            logger
                .warn_builder("Method not allowed")
                .field("method", ctx.method.as_str())
                .emit();
            return respond_empty(response_out, 405);
        }
    };

    let mut filters = FilterState::from_query(ctx.query_string());
    filters.relax_ceiling(config.catalog.price_ceiling);
    let options = DetailOptions::from_query(ctx.query_string());

    logger
        .info_builder("Request started")
        .field("method", ctx.method.as_str())
        .field("view", page.map(|p| p.view().as_str()).unwrap_or("not-found"))
        .field_bool("filtered", !filters.is_default())
        .emit();

    let status = if page.is_some() { 200 } else { 404 };
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
    ];

    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("Invalid response headers: {e:?}"))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|()| anyhow!("Invalid status code {status}"))?;

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let url = config.api.products_url.as_str();
    let display = &config.catalog;
    let outcome = match page {
        Some(Page::Landing) => stream_landing(&mut sink).await,
        Some(Page::Catalog) => {
            let fetch = fetch_catalog(&ctx, url, &logger);
            stream_catalog(&mut sink, fetch, &filters, display).await
        }
        Some(Page::Detail(id)) => {
            let fetch = fetch_catalog(&ctx, url, &logger);
            stream_detail(&mut sink, fetch, id, &filters, &options, display).await
        }
        None => stream_not_found(&mut sink, &ctx.path).await,
    };

    match outcome {
        Ok(summary) => log_completion(&logger, &sink, status, &summary),
        Err(e) => logger
            .error_builder("Streaming failed")
            .field("error", e.to_string())
            .field("phase", sink.phase().as_str())
            .emit(),
    }

    Ok(())
}

/// Fetch the product list once and wrap it for the page.
async fn fetch_catalog(
    ctx: &RequestContext,
    url: &str,
    logger: &StructuredLogger,
) -> Result<Catalog, FetchError> {
    let mut client = FetchClient::new(ctx.request_id.clone(), ctx.timing.clone());
    let result = client
        .fetch::<ProductsResponse>(url, DependencyTag::Catalog)
        .await;
    let waited = client
        .timing()
        .between(MARK_FETCH_START, MARK_FETCH_DONE)
        .unwrap_or_default();

    match result {
        Ok(response) => {
            logger
                .info_builder("Catalog fetched")
                .field("dependency", DependencyTag::Catalog.name())
                .field_u64("products", response.products.len() as u64)
                .duration_ms("fetch_ms", waited)
                .emit();
            Ok(Catalog::from(response.products))
        }
        Err(e) => {
            logger
                .error_builder("Catalog fetch failed")
                .field("dependency", DependencyTag::Catalog.name())
                .field("kind", e.kind())
                .field("error", e.to_string())
                .duration_ms("fetch_ms", waited)
                .emit();
            Err(e)
        }
    }
}

fn log_completion<S, E>(
    logger: &StructuredLogger,
    sink: &StreamingSink<S, E>,
    status: u16,
    summary: &PageSummary,
) where
    S: futures::Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    let timing = sink.timing();
    let mut entry = logger
        .info_builder("Request completed")
        .field_u64("status", u64::from(status))
        .field_u64("sections", sink.sections_sent().len() as u64)
        .field_u64("total_ms", timing.elapsed_ms());

    if let Some(ttfb) = timing.time_to_shell() {
        entry = entry.duration_ms("shell_ms", ttfb);
    }
    if let Some(first) = timing.time_to_first_section() {
        entry = entry.duration_ms("first_section_ms", first);
    }
    let slowest = sink
        .sections_sent()
        .iter()
        .filter_map(|name| timing.section_timing(name))
        .max_by_key(|section| section.duration);
    if let Some(section) = slowest {
        entry = entry
            .field("slowest_section", section.name)
            .duration_ms("slowest_section_ms", section.duration);
    }
    if let Some(loaded) = summary.loaded {
        entry = entry.field_u64("loaded", loaded as u64);
    }
    if let Some(shown) = summary.shown {
        entry = entry.field_u64("shown", shown as u64);
    }
    if let Some(error) = &summary.error {
        entry = entry.field("error", error.as_str());
    }

    entry.emit();
}

/// Reuse a caller-supplied `x-request-id` so logs join up across hops.
fn incoming_request_id(req: &IncomingRequest) -> Option<RequestId> {
    req.headers()
        .get(&"x-request-id".to_string())
        .into_iter()
        .map(|value| String::from_utf8_lossy(&value).trim().to_string())
        .find(|value| !value.is_empty())
        .map(RequestId::from_string)
}

/// Respond with a bare status and no body.
fn respond_empty(response_out: ResponseOutparam, status: u16) -> Result<()> {
    let header_list: Vec<(String, Vec<u8>)> = vec![("allow".to_owned(), "GET".into())];
    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("Invalid response headers: {e:?}"))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|()| anyhow!("Invalid status code {status}"))?;
    response_out.set(response);
    Ok(())
}
