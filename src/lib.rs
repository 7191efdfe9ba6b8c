pub mod config;
pub mod environment;
pub mod proxy;
pub mod scrape;
pub mod types;
pub mod web;

pub use config::FetchConfig;
pub use environment::EnvironmentConfig;
pub use proxy::{ProxyRecord, ProxyRotator, ProxySupplier};
pub use scrape::SiteScraper;
pub use types::{JobDetail, JobSummary};
pub use web::start_web_server;
