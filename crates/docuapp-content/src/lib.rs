//! Structured documentation content for DocuApp.
//!
//! This crate provides:
//! - [`Document`] and [`Section`]: the content model, a closed sum type over
//!   the supported section kinds
//! - [`ContentIndex`]: the fixed key→document table and route→key map
//! - [`lookup`]: total path→document resolution with a fallback document
//!
//! Content is hand-authored in [`pages`] and assembled once at process start;
//! nothing here is mutated at runtime.
//!
//! # Example
//!
//! ```
//! use docuapp_content::{Section, lookup};
//!
//! let doc = lookup("/installation");
//! assert_eq!(doc.title, "Installation Guide");
//! assert!(matches!(doc.sections[0], Section::Paragraph { .. }));
//! ```

mod index;
mod model;
mod pages;

pub use index::{ContentIndex, FALLBACK_KEY, lookup};
pub use model::{CalloutKind, Document, Section};
