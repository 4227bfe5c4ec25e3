//! HTTP client for the Notion REST API

use super::traits::DocumentSource;
use super::wire::{BlockObject, ErrorBody, ListResponse, PageObject};
use crate::config::{ApiConfig, ENV_BASE_URL, ENV_NOTION_VERSION, ENV_TOKEN};
use crate::error::{Error, Result};
use crate::types::{Block, Document, DocumentId};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("notion-notes/", env!("CARGO_PKG_VERSION"));

/// [`DocumentSource`] backed by the Notion REST API
///
/// One `reqwest::Client` is built at construction and reused for every
/// request. The bearer token and `Notion-Version` header are installed as
/// default headers.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: Url,
    database_id: String,
}

impl NotionClient {
    /// Create a client from explicit API settings
    ///
    /// # Errors
    /// Returns a configuration error if the base URL or token cannot be used,
    /// or if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::config(ENV_BASE_URL, format!("invalid API base URL: {}", e))
        })?;
        // Url::join drops the last path segment unless it ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| Error::config(ENV_TOKEN, "token contains invalid header characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_str(&config.notion_version).map_err(|_| {
                Error::config(
                    ENV_NOTION_VERSION,
                    "Notion version contains invalid header characters",
                )
            })?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to create HTTP client: {}", e),
                key: None,
            })?;

        Ok(Self {
            http,
            base_url,
            database_id: config.database_id.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(ENV_BASE_URL, format!("cannot build URL for {path}: {e}")))
    }

    /// Send a request and decode a successful JSON body
    ///
    /// Non-2xx responses become [`Error::Api`] using the Notion error body
    /// when one is present.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(err) => (
                    err.code.unwrap_or_else(|| "unknown".to_string()),
                    err.message.unwrap_or_default(),
                ),
                Err(_) => (
                    "unknown".to_string(),
                    String::from_utf8_lossy(&body).into_owned(),
                ),
            };
            warn!(status = status.as_u16(), code = %code, "Notion API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

fn note_truncation<T>(list: &ListResponse<T>, what: &str) {
    if list.has_more {
        debug!(
            what,
            next_cursor = list.next_cursor.as_deref().unwrap_or(""),
            "more results available; only the first page is used"
        );
    }
}

#[async_trait]
impl DocumentSource for NotionClient {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        let url = self.endpoint(&format!("v1/databases/{}/query", self.database_id))?;
        debug!(url = %url, "querying database");

        let list: ListResponse<PageObject> = self
            .execute(self.http.post(url).json(&serde_json::json!({})))
            .await?;
        note_truncation(&list, "pages");

        Ok(list.results.into_iter().map(Document::from).collect())
    }

    async fn list_blocks(&self, id: &DocumentId) -> Result<Vec<Block>> {
        let url = self.endpoint(&format!("v1/blocks/{}/children", id.as_str()))?;
        debug!(url = %url, "listing block children");

        let list: ListResponse<BlockObject> = self.execute(self.http.get(url)).await?;
        note_truncation(&list, "blocks");

        list.results.into_iter().map(Block::try_from).collect()
    }

    fn name(&self) -> &'static str {
        "notion"
    }
}
