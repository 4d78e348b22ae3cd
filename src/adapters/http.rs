use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Plain-text GET client shared by both sources.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and decodes the body as UTF-8, substituting invalid sequences.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!("Response status: {}", response.status());

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
