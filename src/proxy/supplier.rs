// src/proxy/supplier.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::ProxyRecord;

const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Deserialize)]
struct ProxyListResponse {
    results: Vec<ProxyRecord>,
}

/// Client for the proxy-listing API. A fresh list is fetched per request
/// cycle; nothing is cached across calls.
pub struct ProxySupplier {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl ProxySupplier {
    pub fn new(api_url: String, token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    pub async fn fetch_proxies(&self) -> Result<Vec<ProxyRecord>> {
        let response = self
            .client
            .get(&self.api_url)
            .header("Authorization", format!("Token {}", self.token))
            .send()
            .await
            .context("Failed to call proxy listing API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Proxy listing API returned {}: {}", status, error_text);
        }

        let listing: ProxyListResponse = response
            .json()
            .await
            .context("Failed to parse proxy listing response")?;

        info!("Fetched {} candidate proxies", listing.results.len());
        Ok(listing.results)
    }
}
