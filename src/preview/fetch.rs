use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use thiserror::Error;

/// Fetched page body, ready for attribute queries via
/// [`extract`](super::extract::extract).
#[derive(Debug, Clone)]
pub struct Document {
    html: String,
}

impl Document {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch url: {0}")]
    Network(#[source] reqwest::Error),

    #[error("status code error: {code} {reason}")]
    BadStatus { code: u16, reason: String },

    #[error("failed to parse html: {0}")]
    Parse(#[source] reqwest::Error),
}

impl FetchError {
    /// `true` when the transport gave up waiting on the target. The default
    /// client sets no timeout, so this only fires for a client built with one
    /// and passed to [`HttpFetcher::new`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if e.is_timeout())
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError>;
}

/// Fetches pages with a plain `GET`: no custom headers, no retries, and the
/// client's default redirect policy and timeouts.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: ReqwestClient,
}

impl HttpFetcher {
    pub fn new(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        // The response owns the connection; every early return below drops it.
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(error = ?e, url = %url, "Failed to fetch URL for preview");
            FetchError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "Target returned error status");
            return Err(FetchError::BadStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let html = response.text().await.map_err(|e| {
            tracing::warn!(error = ?e, url = %url, "Failed to read page body");
            FetchError::Parse(e)
        })?;

        Ok(Document::from_html(html))
    }
}
