//! Config API endpoint.
//!
//! Exposes the presentation settings the frontend needs: site title,
//! tagline, theme name, and the application version.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
pub(crate) struct ConfigResponse {
    version: String,
    site: SiteInfo,
    theme: String,
}

#[derive(Serialize)]
pub(crate) struct SiteInfo {
    title: String,
    tagline: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    let options = state.site.options();
    Json(ConfigResponse {
        version: state.version.clone(),
        site: SiteInfo {
            title: options.title.clone(),
            tagline: options.tagline.clone(),
        },
        theme: options.theme.clone(),
    })
}
