//! Document sources
//!
//! A sync run needs exactly two things from the outside world: the list of
//! pages in the database and the blocks of each page. The [`DocumentSource`]
//! trait captures that, with two implementations:
//!
//! - [`NotionClient`]: talks to the Notion REST API over HTTP
//! - [`StaticSource`]: serves fixed in-memory data, for tests and dry runs
//!
//! ## Usage
//!
//! ```no_run
//! use notion_notes::config::ApiConfig;
//! use notion_notes::source::{DocumentSource, NotionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NotionClient::new(&ApiConfig {
//!         token: "secret_xxx".to_string(),
//!         database_id: "0123456789abcdef".to_string(),
//!         ..Default::default()
//!     })?;
//!
//!     for document in client.list_documents().await? {
//!         let blocks = client.list_blocks(&document.id).await?;
//!         println!("{}: {} blocks", document.title, blocks.len());
//!     }
//!     Ok(())
//! }
//! ```

mod memory;
mod notion;
mod traits;
pub(crate) mod wire;

pub use memory::StaticSource;
pub use notion::NotionClient;
pub use traits::DocumentSource;
pub use wire::TITLE_PROPERTIES;
