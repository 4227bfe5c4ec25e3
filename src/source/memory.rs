//! In-memory document source

use super::traits::DocumentSource;
use crate::error::{Error, Result};
use crate::types::{Block, Document, DocumentId};
use async_trait::async_trait;
use std::collections::HashMap;

/// [`DocumentSource`] serving fixed data
///
/// Documents are returned in insertion order. Two documents may share a
/// title; ids should be unique, a repeated id replaces the earlier blocks.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: Vec<Document>,
    blocks: HashMap<DocumentId, Vec<Block>>,
}

impl StaticSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with its blocks
    #[must_use]
    pub fn with_document(
        mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        blocks: Vec<Block>,
    ) -> Self {
        let document = Document::new(id, title);
        self.blocks.insert(document.id.clone(), blocks);
        self.documents.push(document);
        self
    }

    /// Add a listed document whose blocks cannot be fetched
    #[must_use]
    pub fn with_missing_blocks(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.documents.push(Document::new(id, title));
        self
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }

    async fn list_blocks(&self, id: &DocumentId) -> Result<Vec<Block>> {
        self.blocks
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("document {id}")))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
