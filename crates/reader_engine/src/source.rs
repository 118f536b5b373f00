use std::time::Duration;

use futures_util::StreamExt;
use reader_logging::reader_error;
use reqwest::header::{HeaderValue, ACCEPT};
use url::Url;

use crate::{ItemId, RawItem, SourceError, SourceErrorKind};

pub const HACKER_NEWS_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: HACKER_NEWS_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 1024 * 1024,
        }
    }
}

/// Read-only view of a remote item store.
///
/// Implementations are stateless from the caller's point of view and may be
/// shared between any number of scanners.
#[async_trait::async_trait]
pub trait ItemSource: Send + Sync {
    /// Highest item id currently known to the store.
    async fn max_item_id(&self) -> Result<ItemId, SourceError>;

    /// Raw item at `id`. A store that holds nothing there answers with
    /// [`SourceErrorKind::ItemAbsent`], not a transport failure.
    async fn item(&self, id: ItemId) -> Result<RawItem, SourceError>;
}

/// [`ItemSource`] over the Hacker News Firebase API.
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    base_url: String,
    max_bytes: u64,
    client: reqwest::Client,
}

impl HackerNewsClient {
    pub fn new(settings: SourceSettings) -> Result<Self, SourceError> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| SourceError::new(SourceErrorKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| SourceError::transport(err.to_string()))?;

        Ok(Self {
            base_url,
            max_bytes: settings.max_bytes,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, SourceError> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| SourceError::new(SourceErrorKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            reader_error!("request failure url={} status={}", url, status);
            return Err(SourceError::request_failed(
                status.as_u16(),
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| SourceError::malformed(format!("{url}: {err}")))
    }

    fn too_large(&self, actual: u64) -> SourceError {
        SourceError::new(
            SourceErrorKind::TooLarge {
                max_bytes: self.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl ItemSource for HackerNewsClient {
    async fn max_item_id(&self) -> Result<ItemId, SourceError> {
        let body = self.get_json("/maxitem.json").await?;
        body.as_u64()
            .ok_or_else(|| SourceError::malformed(format!("max item id is not an id: {body}")))
    }

    async fn item(&self, id: ItemId) -> Result<RawItem, SourceError> {
        let body = self.get_json(&format!("/item/{id}.json")).await?;
        // The API answers 200 with a `null` body for ids it has nothing for.
        if body.is_null() {
            return Err(SourceError::absent(id));
        }
        serde_json::from_value(body)
            .map_err(|err| SourceError::malformed(format!("item {id}: {err}")))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::new(SourceErrorKind::Timeout, err.to_string());
    }
    SourceError::transport(err.to_string())
}
