//! Configuration types for notion-notes

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Environment variable holding the Notion integration token
pub const ENV_TOKEN: &str = "NOTION_TOKEN";
/// Environment variable holding the database to export
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";
/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "NOTION_OUTPUT_DIR";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "NOTION_API_BASE_URL";
/// Environment variable overriding the `Notion-Version` header
pub const ENV_NOTION_VERSION: &str = "NOTION_VERSION";

/// Connection settings for the Notion API
///
/// Passed explicitly to [`crate::source::NotionClient::new`]; nothing reads
/// credentials from global state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Integration token, sent as a bearer token
    #[serde(default)]
    pub token: String,

    /// Database whose pages are exported
    #[serde(default)]
    pub database_id: String,

    /// API base URL (default: "https://api.notion.com")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header (default: "2022-06-28")
    #[serde(default = "default_notion_version")]
    pub notion_version: String,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
            notion_version: default_notion_version(),
            timeout: default_timeout(),
        }
    }
}

/// Where and how rendered files are written
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created if missing (default: "notion-notes")
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Name of the index file inside `dir` (default: "README.md")
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index_file: default_index_file(),
        }
    }
}

/// Top-level configuration for a sync run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Notion API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Build a configuration from process environment variables
    ///
    /// Unset optional variables fall back to their defaults. Missing
    /// credentials are not rejected here; call [`Config::validate`] for that.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            config.api.token = token;
        }
        if let Ok(id) = std::env::var(ENV_DATABASE_ID) {
            config.api.database_id = id;
        }
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            config.output.dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            config.api.base_url = url;
        }
        if let Ok(version) = std::env::var(ENV_NOTION_VERSION) {
            config.api.notion_version = version;
        }
        config
    }

    /// Check that the values needed for a run are present
    pub fn validate(&self) -> Result<()> {
        if self.api.token.trim().is_empty() {
            return Err(Error::config(ENV_TOKEN, "Notion token is not set"));
        }
        if self.api.database_id.trim().is_empty() {
            return Err(Error::config(
                ENV_DATABASE_ID,
                "Notion database id is not set",
            ));
        }
        if url::Url::parse(&self.api.base_url).is_err() {
            return Err(Error::config(
                ENV_BASE_URL,
                format!("invalid API base URL: {}", self.api.base_url),
            ));
        }
        if self.output.index_file.is_empty() {
            return Err(Error::config("index_file", "index file name is empty"));
        }
        Ok(())
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.notion.com".to_string()
}

fn default_notion_version() -> String {
    "2022-06-28".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("notion-notes")
}

fn default_index_file() -> String {
    "README.md".to_string()
}
