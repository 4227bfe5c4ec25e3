//! # notion-notes
//!
//! Export the pages of a Notion database to Markdown files plus a README
//! index.
//!
//! A run is one sequential pass: query the database once, fetch the blocks
//! of each page, render them to Markdown and write `<slug>.md` into the
//! output directory, then write `README.md` linking every page. Only the
//! first page of API results is used and nested blocks are not followed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use notion_notes::{Config, MarkdownWriter, NotionClient, Syncer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!
//!     let client = NotionClient::new(&config.api)?;
//!     let writer = MarkdownWriter::from_config(&config.output);
//!     let report = Syncer::new(client, writer).run().await?;
//!
//!     println!("wrote {} documents", report.entries.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Markdown rendering
pub mod render;
/// Document sources (Notion API and in-memory)
pub mod source;
/// Sync pipeline
pub mod sync;
/// Core types
pub mod types;
/// Slug and file name helpers
pub mod utils;
/// Output file writer
pub mod writer;

// Re-export commonly used types
pub use config::{ApiConfig, Config, OutputConfig};
pub use error::{Error, Result};
pub use render::render_markdown;
pub use source::{DocumentSource, NotionClient, StaticSource};
pub use sync::{SyncReport, Syncer};
pub use types::{Block, Document, DocumentId, IndexEntry, RichText};
pub use writer::MarkdownWriter;
