//! Pages API endpoint.
//!
//! Renders a page and returns JSON with metadata and HTML content. Page
//! resolution is total (unknown paths yield the fallback document), so this
//! endpoint never 404s; conditional requests are answered with 304 via ETag.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use md5::{Digest, Md5};
use serde::Serialize;

use crate::handlers::to_nav_path;
use crate::state::AppState;

/// Response for GET /api/pages/{path}.
#[derive(Serialize)]
struct PageResponse {
    /// Page metadata.
    meta: PageMeta,
    /// Rendered HTML content fragment.
    content: String,
}

/// Page metadata.
#[derive(Serialize)]
struct PageMeta {
    /// Page title.
    title: String,
    /// Navigation path, with leading slash.
    path: String,
}

/// Handle GET /api/pages/ (root page).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    get_page_impl(String::new(), &state, &headers)
}

/// Handle GET /api/pages/{path}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    get_page_impl(path, &state, &headers)
}

/// Shared implementation for page rendering.
fn get_page_impl(path: String, state: &AppState, headers: &HeaderMap) -> axum::response::Response {
    let nav_path = to_nav_path(&path);
    let result = state.site.render(&nav_path);

    // Conditional request handling
    let etag = compute_etag(&state.version, &result.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    let response = PageResponse {
        meta: PageMeta {
            title: result.title,
            path: nav_path,
        },
        content: result.html,
    };

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
