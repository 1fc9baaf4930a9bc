//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .route(
            "/api/comments/",
            get(handlers::comments::list_root_comments).post(handlers::comments::add_root_comment),
        )
        .route(
            "/api/comments/{*path}",
            get(handlers::comments::list_comments).post(handlers::comments::add_comment),
        );

    // Server-rendered pages for everything else
    let page_routes = Router::new()
        .route("/", get(handlers::views::root_page))
        .route("/{*path}", get(handlers::views::site_page));

    // Add security headers middleware
    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
