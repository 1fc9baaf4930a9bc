//! Server-rendered HTML page routes.
//!
//! Every non-API path renders a full page: layout shell around the resolved
//! document. Resolution is total, so even unknown paths get the fallback
//! document instead of a 404.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::handlers::to_nav_path;
use crate::state::AppState;

/// Handle GET / (root page).
pub(crate) async fn root_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    page(&state, "/")
}

/// Handle GET /{path}.
pub(crate) async fn site_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    page(&state, &to_nav_path(&path))
}

fn page(state: &AppState, nav_path: &str) -> axum::response::Response {
    let html = state.site.page_html(nav_path);
    (
        [(header::CACHE_CONTROL, "private, max-age=60")],
        Html(html),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use docuapp_comments::CommentStore;
    use docuapp_site::{Site, SiteOptions};

    use super::*;

    fn test_state() -> AppState {
        AppState {
            site: Site::new(SiteOptions::default()),
            comments: CommentStore::new(),
            version: "test".to_owned(),
        }
    }

    #[test]
    fn test_page_response_is_html() {
        let state = test_state();

        let response = page(&state, "/database");

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(
            content_type
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
    }

    #[test]
    fn test_unknown_page_still_renders() {
        let state = test_state();

        let response = page(&state, "/nonexistent");

        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
