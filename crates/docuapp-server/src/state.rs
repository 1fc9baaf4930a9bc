//! Application state.
//!
//! Shared state for all request handlers.

use docuapp_comments::CommentStore;
use docuapp_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site facade for navigation and page rendering.
    pub(crate) site: Site,
    /// In-memory comment store.
    pub(crate) comments: CommentStore,
    /// Application version (for ETag computation).
    pub(crate) version: String,
}
