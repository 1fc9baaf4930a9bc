//! Document content model.
//!
//! A [`Document`] is one documentation page: a title plus an ordered list of
//! [`Section`]s. Sections form a closed sum type, so rendering code matches
//! exhaustively and the compiler flags any unhandled kind.
//!
//! The serde representation (internally tagged on `type`) is the boundary
//! contract for externally authored content: tags and payload field names
//! must stay stable.

use serde::{Deserialize, Serialize};

/// One documentation page: a title plus ordered content sections.
///
/// Immutable once constructed. All documents are built at process start and
/// live for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Page title, rendered as the leading heading block.
    pub title: String,
    /// Ordered content sections.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document with a title and its sections.
    #[must_use]
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }
}

/// One typed content node within a document.
///
/// The payload shape is fully determined by the kind tag; no kind may carry
/// another kind's payload. Unknown tags are rejected at the deserialization
/// boundary rather than skipped at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    /// A heading with level 1–4. Levels outside that range render with a
    /// default weight.
    Heading { level: u8, text: String },
    /// Plain text content, rendered verbatim (no markdown interpretation).
    Paragraph { text: String },
    /// An unordered list of plain text items.
    List { items: Vec<String> },
    /// Verbatim code, whitespace and line breaks preserved exactly.
    Code { text: String },
    /// A table with one header row and zero or more data rows.
    ///
    /// Rows are rendered cell-by-cell; a row shorter or longer than the
    /// header row is not an error.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A highlighted box with a kind-specific visual treatment.
    Callout {
        kind: CalloutKind,
        title: String,
        body: String,
    },
}

impl Section {
    /// Heading section.
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Paragraph section.
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// List section from any iterable of items.
    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Code section.
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::Code { text: text.into() }
    }

    /// Table section from header and row iterables.
    #[must_use]
    pub fn table<H, S, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
    {
        Self::Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Callout section.
    #[must_use]
    pub fn callout(kind: CalloutKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Callout {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Callout visual treatment.
///
/// [`CalloutKind::Note`] is the neutral fifth treatment; unknown kind names
/// in external content deserialize to it instead of failing the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CalloutKind {
    Tip,
    Warning,
    Info,
    Error,
    Note,
}

impl CalloutKind {
    /// Parse a kind name; anything unrecognized is [`CalloutKind::Note`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "tip" => Self::Tip,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "error" => Self::Error,
            _ => Self::Note,
        }
    }

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Tip => "tip",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Error => "error",
            Self::Note => "note",
        }
    }
}

impl From<String> for CalloutKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}
