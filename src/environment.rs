// src/environment.rs
use anyhow::{Context, Result};
use tracing::info;

/// Process-level configuration, read once at startup and passed down as
/// plain values. The proxy API secret has no default on purpose.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub scrape_base_url: String,
    pub proxy_api_url: String,
    pub proxy_api_token: String,
}

impl EnvironmentConfig {
    pub fn load() -> Result<Self> {
        let scrape_base_url = std::env::var("SCRAPE_URL")
            .context("SCRAPE_URL environment variable not set")?
            .trim_end_matches('/')
            .to_string();

        let proxy_api_url = std::env::var("PROXY_API_URL").unwrap_or_else(|_| {
            "https://proxy.webshare.io/api/v2/proxy/list/?mode=direct&page=1&page_size=50&country_code__in=US,CA"
                .to_string()
        });

        let proxy_api_token = std::env::var("PROXY_API_SECRET")
            .context("PROXY_API_SECRET environment variable not set")?;

        info!("Scrape target: {}", scrape_base_url);

        Ok(Self {
            scrape_base_url,
            proxy_api_url,
            proxy_api_token,
        })
    }
}
