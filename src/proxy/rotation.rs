// src/proxy/rotation.rs
use anyhow::Result;
use scraper::Html;
use tracing::{debug, info, warn};

use super::ProxyRecord;
use crate::scrape::fetcher::Fetch;

/// Walks the proxy list in supplier order and stops at the first candidate
/// that both fetches and parses. A fetch that transports fine but yields no
/// usable payload counts as a failure, so the next proxy gets its turn.
pub struct ProxyRotator<F: Fetch> {
    fetcher: F,
}

impl<F: Fetch> ProxyRotator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// At most one success: once a candidate wins, later proxies are never
    /// tried. Each valid candidate is attempted exactly once, in order.
    pub async fn fetch_first_success<T, P>(
        &self,
        url: &str,
        proxies: &[ProxyRecord],
        parse: P,
    ) -> Result<(T, ProxyRecord)>
    where
        P: Fn(&Html) -> Option<T> + Send + Sync,
        T: Send,
    {
        for proxy in proxies {
            if !proxy.valid {
                debug!("Skipping invalid proxy {}:{}", proxy.address, proxy.port);
                continue;
            }

            let parsed = match self.fetcher.fetch(url, proxy).await {
                Ok(document) => parse(&document),
                Err(e) => {
                    warn!(
                        "Error accessing {} with proxy {}:{}: {}",
                        url, proxy.address, proxy.port, e
                    );
                    continue;
                }
            };

            match parsed {
                Some(value) => {
                    info!("Fetched {} via {}:{}", url, proxy.address, proxy.port);
                    return Ok((value, proxy.clone()));
                }
                None => {
                    warn!(
                        "No usable payload from {} via {}:{}",
                        url, proxy.address, proxy.port
                    );
                }
            }
        }

        anyhow::bail!("All proxies failed for {}", url)
    }
}
