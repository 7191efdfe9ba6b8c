// src/web/handlers/job_handlers.rs
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::proxy::ProxySupplier;
use crate::scrape::SiteScraper;
use crate::web::types::{ErrorResponse, JobDetailResponse, JobsResponse};

pub const DEFAULT_ROLE: &str = "software engineer";
pub const DEFAULT_LOCATION: &str = "remote";

/// Listing lookups degrade silently: any total failure is logged and the
/// caller gets an empty jobs array.
pub async fn get_jobs_handler(
    role: Option<String>,
    location: Option<String>,
    supplier: &State<ProxySupplier>,
    scraper: &State<SiteScraper>,
) -> Json<JobsResponse> {
    let role = role.unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let location = location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    info!("Listing jobs for role '{}' in '{}'", role, location);

    let jobs = match supplier.fetch_proxies().await {
        Ok(proxies) => match scraper.search_jobs(&role, &location, &proxies).await {
            Ok(jobs) => jobs,
            Err(e) => {
                error!("Failed to fetch jobs from all proxies: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            error!("Failed to fetch proxy list: {}", e);
            Vec::new()
        }
    };

    Json(JobsResponse {
        role,
        location,
        jobs,
    })
}

/// Detail lookups surface failure explicitly: exhausting the proxy list
/// yields an error body with a failure status, never a partial record.
pub async fn get_job_handler(
    job_id: String,
    supplier: &State<ProxySupplier>,
    scraper: &State<SiteScraper>,
) -> Result<Json<JobDetailResponse>, status::Custom<Json<ErrorResponse>>> {
    info!("Looking up job {}", job_id);

    let proxies = match supplier.fetch_proxies().await {
        Ok(proxies) => proxies,
        Err(e) => {
            error!("Failed to fetch proxy list: {}", e);
            return Err(status::Custom(
                Status::InternalServerError,
                Json(ErrorResponse::retrieval_failure()),
            ));
        }
    };

    match scraper.job_detail(&job_id, &proxies).await {
        Ok(job) => Ok(Json(JobDetailResponse { job_id, job })),
        Err(e) => {
            error!("Failed to retrieve job {}: {}", job_id, e);
            Err(status::Custom(
                Status::InternalServerError,
                Json(ErrorResponse::retrieval_failure()),
            ))
        }
    }
}
