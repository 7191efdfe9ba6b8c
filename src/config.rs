// src/config.rs
use std::time::Duration;

/// Per-request fetch options, built once by the caller and threaded through
/// to every fetch attempt. Defaults mimic a desktop Chrome session.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub referer: String,
    pub accept_language: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            referer: "https://www.google.com/".to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_referer(mut self, referer: String) -> Self {
        self.referer = referer;
        self
    }

    pub fn with_accept_language(mut self, accept_language: String) -> Self {
        self.accept_language = accept_language;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
