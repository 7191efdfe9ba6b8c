// src/scrape/fetcher.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::Html;
use tracing::debug;

use crate::config::FetchConfig;
use crate::proxy::ProxyRecord;

/// One GET through one proxy. Implemented by [`PageFetcher`] for real
/// traffic; the rotation tests substitute a scripted implementation.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str, proxy: &ProxyRecord) -> Result<Html>;
}

/// Fetches a single page through an authenticated proxy tunnel with a
/// browser-like header set. No retries here; rotation happens above.
pub struct PageFetcher {
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    // The client is rebuilt per attempt because the tunnel changes with
    // every candidate proxy.
    fn client_for(&self, proxy: &ProxyRecord) -> Result<reqwest::Client> {
        let tunnel = reqwest::Proxy::all(proxy.tunnel_url())
            .context("Invalid proxy tunnel URL")?;

        reqwest::Client::builder()
            .proxy(tunnel)
            .user_agent(&self.config.user_agent)
            .timeout(self.config.timeout)
            .build()
            .context("Failed to create HTTP client")
    }
}

#[async_trait]
impl Fetch for PageFetcher {
    async fn fetch(&self, url: &str, proxy: &ProxyRecord) -> Result<Html> {
        debug!("GET {} via {}:{}", url, proxy.address, proxy.port);

        let client = self.client_for(proxy)?;
        let response = client
            .get(url)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", &self.config.accept_language)
            .header("DNT", "1")
            .header("Connection", "keep-alive")
            .header("Upgrade-Insecure-Requests", "1")
            .header("Referer", &self.config.referer)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error: {}", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(Html::parse_document(&body))
    }
}
