use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::content_type::guess_content_type;
use crate::error::{Result, SitePeekError};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Body and declared type of one fetched resource.
#[derive(Debug, Clone)]
pub struct FetchedFile {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

impl FetchedFile {
    /// Declared content type, or a guess from the URL suffix.
    pub fn content_type_or_guess(&self, url: &str) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| guess_content_type(url).to_string())
    }
}

/// Network access used by the analyzer and the archive assembler.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<FetchedFile>;

    /// Body of `url` decoded with the charset the response declares.
    async fn get_text(&self, url: &str) -> Result<String>;

    /// Content type of `url` without downloading the body.
    async fn head_content_type(&self, url: &str) -> String;
}

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SitePeekError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("Request timeout after {} seconds", self.timeout.as_secs())
        } else {
            err.to_string()
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchedFile> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| SitePeekError::fetch_failed(url, self.describe(&e)))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .bytes()
            .await
            .map_err(|e| SitePeekError::fetch_failed(url, self.describe(&e)))?;

        Ok(FetchedFile {
            body: body.to_vec(),
            content_type,
        })
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!("Fetching page {}", url);

        self.client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| SitePeekError::fetch_failed(url, self.describe(&e)))?
            .text()
            .await
            .map_err(|e| SitePeekError::fetch_failed(url, self.describe(&e)))
    }

    async fn head_content_type(&self, url: &str) -> String {
        let declared = match self.client.head(url).send().await {
            Ok(res) => res
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string()),
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                None
            }
        };

        declared.unwrap_or_else(|| guess_content_type(url).to_string())
    }
}
