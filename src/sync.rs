//! The sync pipeline: list, fetch, render, write
//!
//! One document is fully fetched, rendered and written before the next one
//! starts. The first error ends the run; files already written stay on disk
//! and no index is written.

use crate::error::Result;
use crate::render::render_markdown;
use crate::source::DocumentSource;
use crate::types::IndexEntry;
use crate::writer::MarkdownWriter;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// One entry per written document, in fetch order
    pub entries: Vec<IndexEntry>,
    /// Path of the written index file
    pub index_path: PathBuf,
}

/// Drives a [`DocumentSource`] into a [`MarkdownWriter`]
pub struct Syncer<S> {
    source: S,
    writer: MarkdownWriter,
}

impl<S: DocumentSource> Syncer<S> {
    /// Create a syncer
    pub fn new(source: S, writer: MarkdownWriter) -> Self {
        Self { source, writer }
    }

    /// Run one full export
    ///
    /// # Errors
    /// Returns the first error from the source or the writer.
    pub async fn run(&self) -> Result<SyncReport> {
        self.writer.prepare().await?;

        let documents = self.source.list_documents().await?;
        info!(
            source = self.source.name(),
            count = documents.len(),
            "fetched document list"
        );

        let mut entries = Vec::with_capacity(documents.len());
        for mut document in documents {
            document.blocks = self.source.list_blocks(&document.id).await?;
            let markdown = render_markdown(&document.blocks);
            let entry = self.writer.write_document(&document.title, &markdown).await?;
            debug!(
                id = %document.id,
                title = %document.title,
                blocks = document.blocks.len(),
                file = %entry.file_name,
                "synced document"
            );
            entries.push(entry);
        }

        let index_path = self.writer.write_index(&entries).await?;
        info!(
            documents = entries.len(),
            dir = %self.writer.dir().display(),
            "sync finished"
        );

        Ok(SyncReport {
            entries,
            index_path,
        })
    }
}
