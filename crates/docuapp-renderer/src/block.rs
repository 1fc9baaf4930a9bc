//! Rendered block model and the section dispatch.
//!
//! [`render`] is a stateless, single-pass transform: one [`Block`] per
//! section, in order, preceded by a title heading block. It is a pure
//! function of the document; identical input always yields the identical
//! block sequence.

use docuapp_content::{CalloutKind, Document, Section};

/// Visual weight of a heading block, ordered from lightest to heaviest.
///
/// `Base` is the default weight for levels outside 1–4 and sorts below every
/// real heading level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingWeight {
    Base,
    H4,
    H3,
    H2,
    H1,
}

impl HeadingWeight {
    /// Map a heading level to its weight. Levels outside 1–4 get `Base`.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            _ => Self::Base,
        }
    }
}

/// One table cell, either plain text or inline code.
///
/// A cell whose text contains a backtick becomes inline code with the
/// outermost backtick pair stripped. Only that single pair is interpreted;
/// inner backticks survive verbatim and no other inline markup exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableCell {
    Text(String),
    InlineCode(String),
}

impl TableCell {
    /// Classify raw cell text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.contains('`') {
            Self::InlineCode(strip_outermost_backticks(text))
        } else {
            Self::Text(text.to_owned())
        }
    }
}

/// Remove the first and last backtick of a cell.
///
/// An unbalanced cell with a single backtick loses just that one character.
fn strip_outermost_backticks(text: &str) -> String {
    let Some(first) = text.find('`') else {
        return text.to_owned();
    };
    let last = text.rfind('`').unwrap_or(first);
    let mut stripped = String::with_capacity(text.len());
    stripped.push_str(&text[..first]);
    if last > first {
        stripped.push_str(&text[first + 1..last]);
        stripped.push_str(&text[last + 1..]);
    } else {
        stripped.push_str(&text[first + 1..]);
    }
    stripped
}

/// The visual output unit produced for one section (or the page title).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading {
        weight: HeadingWeight,
        text: String,
    },
    Paragraph {
        text: String,
    },
    List {
        items: Vec<String>,
    },
    Code {
        text: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<TableCell>>,
    },
    Callout {
        kind: CalloutKind,
        title: String,
        body: String,
    },
}

/// Render a document into its ordered block sequence.
///
/// Produces the page title as a leading full-weight heading block, then
/// exactly one block per section. Total: there is no failure mode, and a
/// malformed table row renders whatever cells it has.
#[must_use]
pub fn render(doc: &Document) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(doc.sections.len() + 1);
    blocks.push(Block::Heading {
        weight: HeadingWeight::H1,
        text: doc.title.clone(),
    });
    blocks.extend(doc.sections.iter().map(section_block));
    blocks
}

/// Dispatch one section to its block.
fn section_block(section: &Section) -> Block {
    match section {
        Section::Heading { level, text } => Block::Heading {
            weight: HeadingWeight::from_level(*level),
            text: text.clone(),
        },
        Section::Paragraph { text } => Block::Paragraph { text: text.clone() },
        Section::List { items } => Block::List {
            items: items.clone(),
        },
        Section::Code { text } => Block::Code { text: text.clone() },
        Section::Table { headers, rows } => Block::Table {
            headers: headers.clone(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| TableCell::from_text(cell)).collect())
                .collect(),
        },
        Section::Callout { kind, title, body } => Block::Callout {
            kind: *kind,
            title: title.clone(),
            body: body.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use docuapp_content::CalloutKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_doc() -> Document {
        Document::new(
            "Sample Page",
            vec![
                Section::paragraph("Intro text."),
                Section::heading(2, "Details"),
                Section::list(["one", "two"]),
                Section::code("line 1\n  line 2"),
                Section::table(["Name", "Value"], [["`PORT`", "3000"]]),
                Section::callout(CalloutKind::Tip, "Tip", "Body."),
            ],
        )
    }

    #[test]
    fn test_render_produces_title_plus_one_block_per_section() {
        let doc = sample_doc();

        let blocks = render(&doc);

        assert_eq!(blocks.len(), 1 + doc.sections.len());
        assert_eq!(
            blocks[0],
            Block::Heading {
                weight: HeadingWeight::H1,
                text: "Sample Page".to_owned(),
            }
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = sample_doc();

        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_render_preserves_section_order() {
        let blocks = render(&sample_doc());

        assert!(matches!(blocks[1], Block::Paragraph { .. }));
        assert!(matches!(blocks[2], Block::Heading { .. }));
        assert!(matches!(blocks[3], Block::List { .. }));
        assert!(matches!(blocks[4], Block::Code { .. }));
        assert!(matches!(blocks[5], Block::Table { .. }));
        assert!(matches!(blocks[6], Block::Callout { .. }));
    }

    #[test]
    fn test_code_block_keeps_whitespace_exactly() {
        let blocks = render(&sample_doc());

        let Block::Code { text } = &blocks[4] else {
            panic!("expected code block");
        };
        assert_eq!(text, "line 1\n  line 2");
    }

    #[test]
    fn test_heading_weights_decrease_monotonically() {
        assert!(HeadingWeight::from_level(1) > HeadingWeight::from_level(2));
        assert!(HeadingWeight::from_level(2) > HeadingWeight::from_level(3));
        assert!(HeadingWeight::from_level(3) > HeadingWeight::from_level(4));
    }

    #[test]
    fn test_heading_level_out_of_range_falls_back_to_base() {
        assert_eq!(HeadingWeight::from_level(0), HeadingWeight::Base);
        assert_eq!(HeadingWeight::from_level(5), HeadingWeight::Base);
        assert!(HeadingWeight::from_level(4) > HeadingWeight::Base);
    }

    #[test]
    fn test_backtick_cell_becomes_inline_code() {
        assert_eq!(
            TableCell::from_text("`code`"),
            TableCell::InlineCode("code".to_owned())
        );
    }

    #[test]
    fn test_plain_cell_stays_text() {
        assert_eq!(
            TableCell::from_text("3000"),
            TableCell::Text("3000".to_owned())
        );
    }

    #[test]
    fn test_only_outermost_backtick_pair_is_stripped() {
        assert_eq!(
            TableCell::from_text("`a` and `b`"),
            TableCell::InlineCode("a` and `b".to_owned())
        );
    }

    #[test]
    fn test_unbalanced_backtick_is_dropped() {
        assert_eq!(
            TableCell::from_text("PORT`"),
            TableCell::InlineCode("PORT".to_owned())
        );
    }

    #[test]
    fn test_short_table_row_renders_available_cells() {
        let doc = Document::new(
            "T",
            vec![Section::Table {
                headers: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
                rows: vec![vec!["only".to_owned()]],
            }],
        );

        let blocks = render(&doc);

        let Block::Table { headers, rows } = &blocks[1] else {
            panic!("expected table block");
        };
        assert_eq!(headers.len(), 3);
        assert_eq!(rows[0], vec![TableCell::Text("only".to_owned())]);
    }
}
