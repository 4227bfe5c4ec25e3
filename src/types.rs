//! Core types for notion-notes

use serde::{Deserialize, Serialize};

/// Title used when a page has none of the recognised title properties
pub const UNTITLED: &str = "Untitled";

/// Opaque identifier of a Notion page
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Create a new DocumentId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One plain-text fragment of a block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RichText(pub String);

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// A content block inside a document
///
/// Only the kinds below are rendered. Everything else arrives as
/// [`Block::Unsupported`] and is dropped by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Plain paragraph
    Paragraph(Vec<RichText>),
    /// Top-level heading
    Heading1(Vec<RichText>),
    /// Second-level heading
    Heading2(Vec<RichText>),
    /// Third-level heading
    Heading3(Vec<RichText>),
    /// Bullet list entry
    BulletedListItem(Vec<RichText>),
    /// Numbered list entry
    NumberedListItem(Vec<RichText>),
    /// Code snippet with optional language tag
    Code {
        /// Code text runs
        text: Vec<RichText>,
        /// Language tag for the fence, if any
        language: Option<String>,
    },
    /// Any block kind without a Markdown template
    Unsupported {
        /// The block's `type` as reported by the API
        kind: String,
    },
}

impl Block {
    /// Concatenate the block's text runs without separators
    ///
    /// Unsupported blocks have no text.
    pub fn plain_text(&self) -> String {
        let runs: &[RichText] = match self {
            Block::Paragraph(runs)
            | Block::Heading1(runs)
            | Block::Heading2(runs)
            | Block::Heading3(runs)
            | Block::BulletedListItem(runs)
            | Block::NumberedListItem(runs) => runs.as_slice(),
            Block::Code { text, .. } => text.as_slice(),
            Block::Unsupported { .. } => &[],
        };
        runs.iter().map(|run| run.0.as_str()).collect()
    }
}

/// A page from the database, as listed by the query API
///
/// Blocks are fetched in a second call and attached before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Page identifier
    pub id: DocumentId,
    /// Resolved title, [`UNTITLED`] if no title property matched
    pub title: String,
    /// Content blocks in page order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document with no blocks yet
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            title: title.into(),
            blocks: Vec::new(),
        }
    }
}

/// One line of the README index
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Document title as shown in the link text
    pub title: String,
    /// Output file name (`<slug>.md`), used as the link target
    pub file_name: String,
}
