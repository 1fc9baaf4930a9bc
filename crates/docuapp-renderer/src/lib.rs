//! Document renderer for DocuApp.
//!
//! Converts a [`Document`](docuapp_content::Document) into an ordered
//! sequence of [`Block`]s (the page title first, then exactly one block per
//! section) and emits those blocks as semantic HTML.
//!
//! The transform is pure and total: no I/O, no state, no failure mode.
//! Re-rendering is idempotent, so callers may freely discard stale output on
//! rapid navigation.
//!
//! # Example
//!
//! ```
//! use docuapp_content::{Document, Section};
//! use docuapp_renderer::{Block, render, render_html};
//!
//! let doc = Document::new("Guide", vec![Section::paragraph("Hello.")]);
//! let blocks = render(&doc);
//! assert_eq!(blocks.len(), 2);
//! assert!(render_html(&doc).starts_with("<h1>Guide</h1>"));
//! ```

mod block;
mod html;

pub use block::{Block, HeadingWeight, TableCell, render};
pub use html::{blocks_to_html, escape_html, render_html};
