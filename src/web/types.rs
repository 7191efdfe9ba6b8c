// src/web/types.rs
use rocket::serde::Serialize;

use crate::types::{JobDetail, JobSummary};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobsResponse {
    pub role: String,
    pub location: String,
    pub jobs: Vec<JobSummary>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobDetailResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub job: JobDetail,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn retrieval_failure() -> Self {
        Self {
            error: "Failed to retrieve data".to_string(),
        }
    }
}
