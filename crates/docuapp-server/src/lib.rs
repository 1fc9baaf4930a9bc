//! HTTP server for the DocuApp documentation engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for page rendering, navigation, comments, and config
//! - Server-rendered HTML pages for every documentation route
//!
//! # Quick Start
//!
//! ```ignore
//! use docuapp_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (docuapp-server)
//!                        │
//!                        ├─► API routes (JSON handlers)
//!                        │       │
//!                        │       └─► Direct call ──► Site (lookup + render)
//!                        │
//!                        └─► Page routes (server-rendered HTML shell)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use docuapp_comments::CommentStore;
use docuapp_site::{Site, SiteOptions};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site title shown in the layout shell.
    pub site_title: String,
    /// Tagline shown under the site title.
    pub tagline: String,
    /// Theme name stamped on rendered pages.
    pub theme: String,
    /// Application version (for ETag computation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            site_title: "DocuApp".to_string(),
            tagline: "Documentation Hub".to_string(),
            theme: "light".to_string(),
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = Site::new(SiteOptions {
        title: config.site_title.clone(),
        tagline: config.tagline.clone(),
        theme: config.theme.clone(),
    });

    // Create app state
    let state = Arc::new(AppState {
        site,
        comments: CommentStore::new(),
        version: config.version.clone(),
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from application config.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_config(config: &docuapp_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site_title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        theme: config.site.theme.name().to_string(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut app_config = docuapp_config::Config::default();
        app_config.server.port = 9000;
        app_config.site.theme = docuapp_config::Theme::Dark;

        let config = server_config_from_config(&app_config, "0.3.2".to_owned());

        assert_eq!(config.port, 9000);
        assert_eq!(config.theme, "dark");
        assert_eq!(config.version, "0.3.2");
        assert_eq!(config.site_title, "DocuApp");
    }
}
