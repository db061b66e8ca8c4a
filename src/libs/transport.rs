//! HTTP access to the vendor's update endpoint and download host.

use super::config::{APP_METADATA_NAME, APP_METADATA_VERSION};
use super::error::UpdateError;
use super::progress::Progress;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Capability for the two HTTP calls a run makes.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GETs `url` and returns the body as text.
    async fn fetch_text(&self, url: &str) -> Result<String, UpdateError>;

    /// Streams `url` into `destination`, reporting progress per chunk.
    /// Returns the number of bytes written.
    async fn download(&self, url: &str, destination: &Path, progress: &mut dyn Progress) -> Result<u64, UpdateError>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, UpdateError> {
        let mut headers = HeaderMap::new();
        let agent = format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION);
        if let Ok(value) = HeaderValue::from_str(&agent) {
            headers.insert(USER_AGENT, value);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch_text(&self, url: &str) -> Result<String, UpdateError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn download(&self, url: &str, destination: &Path, progress: &mut dyn Progress) -> Result<u64, UpdateError> {
        debug!("downloading {} to {}", url, destination.display());
        let mut response = self.client.get(url).send().await?.error_for_status()?;
        let total = response.content_length();
        debug!("declared content length: {:?}", total);

        let mut file = File::create(destination).await?;
        let mut current = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            current += chunk.len() as u64;
            progress.update(current, total);
        }
        file.flush().await?;
        progress.finish();

        Ok(current)
    }
}
