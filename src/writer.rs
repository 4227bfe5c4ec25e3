//! Output writer for rendered documents and the README index

use crate::config::OutputConfig;
use crate::error::{Error, Result};
use crate::types::IndexEntry;
use crate::utils::markdown_file_name;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed heading block at the top of the index file
pub const INDEX_HEADER: &str =
    "# Notion 同步笔记\n\n这里是从 Notion 自动同步的笔记内容。\n\n## 笔记列表\n\n";

/// Render the index file contents
///
/// Entries are listed as `* [title](file)` in the given order, followed by a
/// single trailing newline.
///
/// # Examples
///
/// ```
/// use notion_notes::types::IndexEntry;
/// use notion_notes::writer::{INDEX_HEADER, render_index};
///
/// let index = render_index(&[IndexEntry {
///     title: "Notes".to_string(),
///     file_name: "notes.md".to_string(),
/// }]);
/// assert_eq!(index, format!("{INDEX_HEADER}* [Notes](notes.md)\n"));
/// ```
#[must_use]
pub fn render_index(entries: &[IndexEntry]) -> String {
    let list = entries
        .iter()
        .map(|entry| format!("* [{}]({})", entry.title, entry.file_name))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{INDEX_HEADER}{list}\n")
}

/// Writes Markdown files into a single output directory
///
/// Existing files are overwritten without comparison. Nothing is cleaned up
/// if a later write fails.
#[derive(Debug, Clone)]
pub struct MarkdownWriter {
    dir: PathBuf,
    index_file: String,
}

impl MarkdownWriter {
    /// Writer for `dir` using the default index file name
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::from_config(&OutputConfig {
            dir: dir.into(),
            ..Default::default()
        })
    }

    /// Writer from output settings
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            index_file: config.index_file.clone(),
        }
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory and any missing parents
    pub async fn prepare(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| Error::io(&self.dir, e))
    }

    /// Write one document's Markdown to `<slug>.md`
    ///
    /// Returns the index entry for the written file.
    pub async fn write_document(&self, title: &str, markdown: &str) -> Result<IndexEntry> {
        let file_name = markdown_file_name(title);
        let path = self.dir.join(&file_name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "overwriting existing file");
        }
        tokio::fs::write(&path, markdown)
            .await
            .map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = markdown.len(), "wrote document");

        Ok(IndexEntry {
            title: title.to_string(),
            file_name,
        })
    }

    /// Write the index file listing `entries`
    ///
    /// Returns the path of the written file.
    pub async fn write_index(&self, entries: &[IndexEntry]) -> Result<PathBuf> {
        let path = self.dir.join(&self.index_file);
        tokio::fs::write(&path, render_index(entries))
            .await
            .map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), entries = entries.len(), "wrote index");
        Ok(path)
    }
}
