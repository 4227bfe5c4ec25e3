//! The document source seam

use crate::types::{Block, Document, DocumentId};
use async_trait::async_trait;

/// Trait for anything that can supply documents and their blocks
///
/// Both operations return a single page of results. Implementations do not
/// follow pagination cursors and do not recurse into nested children.
///
/// # Examples
///
/// ```
/// use notion_notes::source::{DocumentSource, StaticSource};
/// use notion_notes::types::Block;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = StaticSource::new()
///     .with_document("page-1", "Notes", vec![Block::Paragraph(vec!["hi".into()])]);
///
/// let documents = source.list_documents().await?;
/// assert_eq!(documents[0].title, "Notes");
///
/// let blocks = source.list_blocks(&documents[0].id).await?;
/// assert_eq!(blocks.len(), 1);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List the documents in the database, in the order the source returns them
    ///
    /// Returned documents carry their id and resolved title; `blocks` is empty
    /// until filled from [`DocumentSource::list_blocks`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the credentials are rejected, or
    /// the response cannot be decoded.
    async fn list_documents(&self) -> crate::Result<Vec<Document>>;

    /// List the top-level content blocks of one document, in page order
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the document does not exist, or
    /// the response cannot be decoded.
    async fn list_blocks(&self, id: &DocumentId) -> crate::Result<Vec<Block>>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
