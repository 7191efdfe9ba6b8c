// src/types/job_data.rs
use serde::{Deserialize, Serialize};

/// Normalized job-detail record. The key set is constant: a missing
/// upstream source fills a field with its default instead of dropping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub employer_logo: Option<String>,
    pub employer_name: Option<String>,
    pub job_title: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_city: Option<String>,
    pub job_is_remote: bool,
    pub salary_text: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub job_salary_currency: String,
    pub job_description: Option<String>,
    pub job_description_html: Option<String>,
    pub job_benefits: Vec<String>,
    pub job_age: Option<String>,
    pub job_required_skills: Vec<String>,
}

/// Normalized listing entry, one per job card on a search-results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: String,
    pub job_title: String,
    pub employer_name: String,
    pub job_city: String,
    pub job_is_remote: bool,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_required_skills: Vec<String>,
    pub salary_text: Option<String>,
    pub job_benefits: Vec<String>,
    pub employer_logo: Option<String>,
    pub html_snippet: Option<String>,
    pub job_apply_link: String,
    pub job_description: Vec<String>,
}
