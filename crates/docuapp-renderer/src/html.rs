//! HTML emission for rendered blocks.
//!
//! Produces semantic HTML5. All text content passes through [`escape_html`];
//! the only markup that originates from content is the structural markup
//! emitted here.

use std::borrow::Cow;
use std::fmt::Write;

use docuapp_content::Document;

use crate::block::{Block, HeadingWeight, TableCell, render};

/// Escape `&`, `<`, `>` and `"` for safe HTML text and attribute positions.
///
/// Borrows when the input needs no escaping, which is the common case for
/// documentation prose.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Render a document straight to an HTML fragment.
///
/// Equivalent to [`render`] followed by [`blocks_to_html`].
#[must_use]
pub fn render_html(doc: &Document) -> String {
    blocks_to_html(&render(doc))
}

/// Emit an HTML fragment for a block sequence, one block per line.
#[must_use]
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(4096);
    for block in blocks {
        block_html(block, &mut out);
        out.push('\n');
    }
    out
}

fn block_html(block: &Block, out: &mut String) {
    match block {
        Block::Heading { weight, text } => heading_html(*weight, text, out),
        Block::Paragraph { text } => {
            write!(out, "<p>{}</p>", escape_html(text)).unwrap();
        }
        Block::List { items } => {
            out.push_str("<ul>");
            for item in items {
                write!(out, "<li>{}</li>", escape_html(item)).unwrap();
            }
            out.push_str("</ul>");
        }
        Block::Code { text } => {
            write!(out, "<pre><code>{}</code></pre>", escape_html(text)).unwrap();
        }
        Block::Table { headers, rows } => table_html(headers, rows, out),
        Block::Callout { kind, title, body } => {
            write!(
                out,
                r#"<div class="callout callout-{}"><div class="callout-title">{}</div><p>{}</p></div>"#,
                kind.name(),
                escape_html(title),
                escape_html(body)
            )
            .unwrap();
        }
    }
}

/// Headings map to `<h1>`–`<h4>`; the base weight is a styled paragraph.
fn heading_html(weight: HeadingWeight, text: &str, out: &mut String) {
    let tag = match weight {
        HeadingWeight::H1 => "h1",
        HeadingWeight::H2 => "h2",
        HeadingWeight::H3 => "h3",
        HeadingWeight::H4 => "h4",
        HeadingWeight::Base => {
            write!(out, r#"<p class="heading">{}</p>"#, escape_html(text)).unwrap();
            return;
        }
    };
    write!(out, "<{tag}>{}</{tag}>", escape_html(text)).unwrap();
}

fn table_html(headers: &[String], rows: &[Vec<TableCell>], out: &mut String) {
    out.push_str("<table><thead><tr>");
    for header in headers {
        write!(out, "<th>{}</th>", escape_html(header)).unwrap();
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            match cell {
                TableCell::Text(text) => {
                    write!(out, "<td>{}</td>", escape_html(text)).unwrap();
                }
                TableCell::InlineCode(text) => {
                    write!(out, "<td><code>{}</code></td>", escape_html(text)).unwrap();
                }
            }
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}
