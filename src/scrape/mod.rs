// src/scrape/mod.rs
use anyhow::Result;
use tracing::info;

pub mod extract;
pub mod fetcher;
pub mod html_text;
pub mod normalize;

use crate::config::FetchConfig;
use crate::proxy::{ProxyRecord, ProxyRotator};
use crate::types::{JobDetail, JobSummary};
use fetcher::{Fetch, PageFetcher};

/// High-level scraper for the job site: builds the two page URLs and runs
/// the rotation → extraction → normalization pipeline for each.
pub struct SiteScraper<F: Fetch = PageFetcher> {
    rotator: ProxyRotator<F>,
    base_url: String,
}

impl SiteScraper<PageFetcher> {
    pub fn new(base_url: String, config: FetchConfig) -> Self {
        Self {
            rotator: ProxyRotator::new(PageFetcher::new(config)),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl<F: Fetch> SiteScraper<F> {
    fn search_url(&self, role: &str, location: &str) -> String {
        format!(
            "{}/jobs?q={}&l={}&from=searchOnDesktopSerp",
            self.base_url, role, location
        )
    }

    fn detail_url(&self, job_id: &str) -> String {
        format!("{}/viewjob?jk={}", self.base_url, job_id)
    }

    /// Fetches one search-results page through the proxy list and
    /// normalizes every job card on it.
    pub async fn search_jobs(
        &self,
        role: &str,
        location: &str,
        proxies: &[ProxyRecord],
    ) -> Result<Vec<JobSummary>> {
        let url = self.search_url(role, location);
        let (entries, used) = self
            .rotator
            .fetch_first_success(&url, proxies, extract::extract_list_payload)
            .await?;

        info!(
            "Extracted {} job cards via {}:{}",
            entries.len(),
            used.address,
            used.port
        );

        Ok(entries.iter().map(normalize::normalize_summary).collect())
    }

    /// Fetches one job-detail page through the proxy list and normalizes
    /// its embedded payload.
    pub async fn job_detail(
        &self,
        job_id: &str,
        proxies: &[ProxyRecord],
    ) -> Result<JobDetail> {
        let url = self.detail_url(job_id);
        let (payload, used) = self
            .rotator
            .fetch_first_success(&url, proxies, extract::extract_detail_payload)
            .await?;

        info!(
            "Extracted detail payload for job {} via {}:{}",
            job_id, used.address, used.port
        );

        Ok(normalize::normalize_detail(&payload))
    }
}
