//! In-memory per-page comments for DocuApp.
//!
//! Backs the page-level "add a note" surface: free text appended as a new
//! entry under a page path. Entries live for the lifetime of the process;
//! there is deliberately no persistence layer.
//!
//! # Example
//!
//! ```
//! use docuapp_comments::CommentStore;
//!
//! let store = CommentStore::new();
//! let comment = store.add("/database", "Great section on migrations.").unwrap();
//! assert_eq!(store.list("/database"), vec![comment]);
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One comment entry on a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Unique id, assigned on insert.
    pub id: Uuid,
    /// Navigation path of the page the comment belongs to.
    pub page: String,
    /// Free-text body, trimmed.
    pub body: String,
    /// Insert time.
    pub created_at: DateTime<Utc>,
}

/// Error returned when a comment cannot be added.
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    /// Body was empty or whitespace-only.
    #[error("comment body must not be empty")]
    EmptyBody,
}

/// Thread-safe append-only comment store, keyed by page path.
#[derive(Debug, Default)]
pub struct CommentStore {
    by_page: RwLock<HashMap<String, Vec<Comment>>>,
}

impl CommentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment to a page.
    ///
    /// The body is trimmed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`CommentError::EmptyBody`] for empty or whitespace-only
    /// bodies.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn add(&self, page: &str, body: &str) -> Result<Comment, CommentError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(CommentError::EmptyBody);
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            page: page.to_owned(),
            body: body.to_owned(),
            created_at: Utc::now(),
        };

        self.by_page
            .write()
            .unwrap()
            .entry(page.to_owned())
            .or_default()
            .push(comment.clone());

        Ok(comment)
    }

    /// All comments for a page, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn list(&self, page: &str) -> Vec<Comment> {
        self.by_page
            .read()
            .unwrap()
            .get(page)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of comments across all pages.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_page.read().unwrap().values().map(Vec::len).sum()
    }

    /// True if no page has comments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
