//! Demo HTTP host.
//!
//! `GET /` renders a page carrying the enabled assets and content in which
//! the search form shortcode is expanded. The form submits back to `/` with
//! `s` set, which runs the pre-search hook and answers with the filter that
//! would be handed to the search engine.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use taxsearch_core::host::RequestParams;
use taxsearch_core::{FilterExpression, SHORTCODE_TAG};
use taxsearch_host::request::SEARCH_PARAM;
use taxsearch_host::QueryParams;

use crate::site::Site;

/// Body of a search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search: Option<String>,
    pub tax_query: Option<FilterExpression>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

pub fn router(site: Arc<Site>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .with_state(site)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(site: Site, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving");
    axum::serve(listener, router(Arc::new(site))).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(site): State<Arc<Site>>, RawQuery(query): RawQuery) -> Response {
    let params = QueryParams::parse(query.as_deref().unwrap_or(""));
    if params.param(SEARCH_PARAM).is_some() {
        search(&site, &params)
    } else {
        Html(page(&site)).into_response()
    }
}

fn search(site: &Site, params: &QueryParams) -> Response {
    match site.search(params) {
        Ok(request) => {
            tracing::info!(
                search = request.search_text().unwrap_or(""),
                filtered = request.taxonomy_filter().is_some(),
                "search"
            );
            Json(SearchResponse {
                search: request.search_text().map(str::to_string),
                tax_query: request.taxonomy_filter().cloned(),
            })
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "search filter failed");
            let body = ErrorBody {
                error: err.to_string(),
                detail: std::error::Error::source(&err).map(|source| source.to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

fn page(site: &Site) -> String {
    let assets = site.assets();
    let content = format!("<h1>Search</h1>\n[{SHORTCODE_TAG}]");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Search</title>\n{}\n</head>\n<body>\n<main>{}</main>\n{}\n</body>\n</html>\n",
        assets.head_html(),
        site.render_content(&content),
        assets.footer_html(),
    )
}
