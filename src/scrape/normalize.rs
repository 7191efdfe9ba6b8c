// src/scrape/normalize.rs
//! Collapses the site's inconsistent payload shapes into the two stable
//! output records. Every field goes through an ordered fallback chain; a
//! missing key anywhere in the tree means "no value", never an error.

use serde_json::Value;

use super::html_text::list_item_texts;
use crate::types::{JobDetail, JobSummary};

/// First value among `paths` that is present, non-null, and non-empty.
fn first_value<'a>(payload: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .find_map(|path| payload.pointer(path).filter(|value| !is_absent(value)))
}

// Empty strings and empty arrays count as absent, so fallbacks fire on
// upstream placeholders like `"title": ""`.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn first_string(payload: &Value, paths: &[&str]) -> Option<String> {
    first_value(payload, paths)
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn first_number(payload: &Value, paths: &[&str]) -> Option<f64> {
    first_value(payload, paths).and_then(Value::as_f64)
}

/// Maps an upstream sequence of benefit/skill entries to their labels.
/// Entries arrive either as `{"label": "..."}` objects or bare strings.
fn label_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    item.get("label")
                        .and_then(Value::as_str)
                        .or_else(|| item.as_str())
                        .map(str::to_string)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Normalizes a decoded `window._initialData` payload from a job-detail
/// page. Pure; the caller decides what a completely absent payload means.
pub fn normalize_detail(payload: &Value) -> JobDetail {
    let job_city = first_string(
        payload,
        &[
            "/hostQueryExecutionResult/data/jobData/results/0/job/location/city",
            "/hostQueryExecutionResult/data/jobData/results/0/job/location/formatted/short",
        ],
    );

    // Detail pages flag remote jobs through the city field itself.
    let job_is_remote = job_city
        .as_deref()
        .map(|city| city.eq_ignore_ascii_case("remote"))
        .unwrap_or(false);

    JobDetail {
        employer_logo: first_string(
            payload,
            &["/jobInfoWrapperModel/jobInfoModel/jobInfoHeaderModel/companyImagesModel/logoUrl"],
        ),
        employer_name: first_string(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/sourceEmployerName",
                "/jobInfoWrapperModel/jobInfoModel/jobInfoHeaderModel/companyName",
            ],
        ),
        job_title: first_string(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/title",
                "/jobInfoWrapperModel/jobInfoModel/jobInfoHeaderModel/jobTitle",
            ],
        ),
        job_apply_link: first_string(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/url",
                "/jobMetadataFooterModel/originalJobLink/href",
            ],
        ),
        job_city,
        job_is_remote,
        salary_text: first_string(
            payload,
            &[
                "/salaryInfoModel/salaryText",
                "/salaryGuideModel/estimatedSalaryModel/formattedRange",
            ],
        ),
        min_salary: first_number(
            payload,
            &[
                "/salaryInfoModel/salaryMin",
                "/salaryGuideModel/estimatedSalaryModel/min",
            ],
        ),
        max_salary: first_number(
            payload,
            &[
                "/salaryInfoModel/salaryMax",
                "/salaryGuideModel/estimatedSalaryModel/max",
            ],
        ),
        job_salary_currency: first_string(payload, &["/salaryInfoModel/salaryCurrency"])
            .unwrap_or_else(|| "USD".to_string()),
        job_description: first_string(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/description/text",
                "/hostQueryExecutionResult/data/jobData/results/0/job/description/html",
            ],
        ),
        job_description_html: first_string(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/description/html",
                "/jobInfoWrapperModel/jobInfoModel/sanitizedJobDescription",
            ],
        ),
        job_benefits: label_strings(first_value(
            payload,
            &[
                "/hostQueryExecutionResult/data/jobData/results/0/job/benefits",
                "/benefitsModel/benefits",
            ],
        )),
        job_age: first_string(payload, &["/hiringInsightsModel/age"]),
        job_required_skills: label_strings(first_value(
            payload,
            &["/hostQueryExecutionResult/data/jobData/results/0/job/attributes"],
        )),
    }
}

/// Normalizes one entry of the jobcards `results` sequence.
pub fn normalize_summary(entry: &Value) -> JobSummary {
    let job_id =
        first_string(entry, &["/jobkey"]).unwrap_or_else(|| "No Job ID".to_string());

    // Listing cards carry a dedicated remote-work text instead of
    // overloading the location field the way detail pages do.
    let job_is_remote = first_string(entry, &["/remoteWorkModel/text"])
        .map(|text| text.to_lowercase().contains("remote"))
        .unwrap_or(false);

    let snippet = first_string(entry, &["/snippet"]);

    JobSummary {
        job_title: first_string(entry, &["/displayTitle", "/title"])
            .unwrap_or_else(|| "Unknown Title".to_string()),
        employer_name: first_string(entry, &["/company"])
            .unwrap_or_else(|| "Unknown Company".to_string()),
        job_city: first_string(entry, &["/formattedLocation", "/jobLocationCity"])
            .unwrap_or_else(|| "Unknown Location".to_string()),
        job_is_remote,
        job_min_salary: first_number(entry, &["/extractedSalary/min", "/estimatedSalary/min"]),
        job_max_salary: first_number(entry, &["/extractedSalary/max", "/estimatedSalary/max"]),
        job_required_skills: label_strings(first_value(
            entry,
            &[
                "/jobCardRequirementsModel/jobTagRequirements",
                "/jobCardRequirementsModel/jobOnlyRequirements",
            ],
        )),
        salary_text: first_string(entry, &["/salarySnippet/text"]),
        job_benefits: benefit_labels(entry),
        employer_logo: first_string(entry, &["/companyBrandingAttributes/logoUrl"]),
        job_apply_link: format!("/viewjob?jk={}", job_id),
        job_description: snippet
            .as_deref()
            .map(list_item_texts)
            .unwrap_or_default(),
        html_snippet: snippet,
        job_id,
    }
}

// Benefits live in the taxonomy group whose own label is "benefits".
fn benefit_labels(entry: &Value) -> Vec<String> {
    entry
        .pointer("/taxonomyAttributes")
        .and_then(Value::as_array)
        .and_then(|groups| {
            groups
                .iter()
                .find(|group| group.get("label").and_then(Value::as_str) == Some("benefits"))
        })
        .map(|group| label_strings(group.get("attributes")))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_payload() -> Value {
        json!({
            "jobInfoWrapperModel": {
                "jobInfoModel": {
                    "jobInfoHeaderModel": {
                        "companyImagesModel": {"logoUrl": "https://cdn.example.com/logo.png"},
                        "companyName": "Acme Holdings",
                        "jobTitle": "Other"
                    },
                    "sanitizedJobDescription": "<p>sanitized</p>"
                }
            },
            "hostQueryExecutionResult": {
                "data": {
                    "jobData": {
                        "results": [{
                            "job": {
                                "sourceEmployerName": "Acme Inc",
                                "title": "Backend Engineer",
                                "url": "https://jobs.example.com/apply/1",
                                "location": {"city": "Denver", "formatted": {"short": "Denver, CO"}},
                                "description": {"text": "Build services.", "html": "<p>Build services.</p>"},
                                "benefits": [{"label": "Dental insurance"}, {"label": "401(k)"}],
                                "attributes": [{"label": "Python"}, {"label": "Kubernetes"}]
                            }
                        }]
                    }
                }
            },
            "salaryInfoModel": {
                "salaryText": "$120,000 - $150,000 a year",
                "salaryMin": 120000.0,
                "salaryMax": 150000.0,
                "salaryCurrency": "USD"
            },
            "hiringInsightsModel": {"age": "5 days ago"}
        })
    }

    #[test]
    fn test_primary_paths_win() {
        let detail = normalize_detail(&detail_payload());
        assert_eq!(detail.job_title.as_deref(), Some("Backend Engineer"));
        assert_eq!(detail.employer_name.as_deref(), Some("Acme Inc"));
        assert_eq!(detail.job_city.as_deref(), Some("Denver"));
        assert!(!detail.job_is_remote);
        assert_eq!(detail.min_salary, Some(120000.0));
        assert_eq!(detail.job_benefits, vec!["Dental insurance", "401(k)"]);
        assert_eq!(detail.job_required_skills, vec!["Python", "Kubernetes"]);
        assert_eq!(detail.job_age.as_deref(), Some("5 days ago"));
    }

    #[test]
    fn test_empty_primary_triggers_fallback() {
        let mut payload = detail_payload();
        *payload
            .pointer_mut("/hostQueryExecutionResult/data/jobData/results/0/job/title")
            .unwrap() = json!("");
        *payload
            .pointer_mut("/jobInfoWrapperModel/jobInfoModel/jobInfoHeaderModel/jobTitle")
            .unwrap() = json!("Fallback Title");

        let detail = normalize_detail(&payload);
        assert_eq!(detail.job_title.as_deref(), Some("Fallback Title"));
    }

    #[test]
    fn test_missing_primary_city_uses_formatted_short() {
        let mut payload = detail_payload();
        *payload
            .pointer_mut("/hostQueryExecutionResult/data/jobData/results/0/job/location")
            .unwrap() = json!({"formatted": {"short": "Remote"}});

        let detail = normalize_detail(&payload);
        assert_eq!(detail.job_city.as_deref(), Some("Remote"));
        assert!(detail.job_is_remote);
    }

    #[test]
    fn test_detail_defaults_on_empty_payload() {
        let detail = normalize_detail(&json!({}));
        assert_eq!(detail.employer_logo, None);
        assert_eq!(detail.job_title, None);
        assert_eq!(detail.job_salary_currency, "USD");
        assert!(!detail.job_is_remote);
        assert!(detail.job_benefits.is_empty());
        assert!(detail.job_required_skills.is_empty());
    }

    #[test]
    fn test_benefits_fall_back_to_benefits_model() {
        let mut payload = detail_payload();
        *payload
            .pointer_mut("/hostQueryExecutionResult/data/jobData/results/0/job/benefits")
            .unwrap() = json!([]);
        payload["benefitsModel"] = json!({"benefits": [{"label": "Paid time off"}]});

        let detail = normalize_detail(&payload);
        assert_eq!(detail.job_benefits, vec!["Paid time off"]);
    }

    #[test]
    fn test_normalize_detail_is_idempotent() {
        let payload = detail_payload();
        assert_eq!(normalize_detail(&payload), normalize_detail(&payload));
    }

    fn list_entry() -> Value {
        json!({
            "jobkey": "30eb562caef8a2a6",
            "displayTitle": "Senior JavaScript Developer",
            "title": "Senior JavaScript Developer - Platform",
            "company": "Initech",
            "formattedLocation": "Boulder, CO",
            "remoteWorkModel": {"text": "Remote - United States"},
            "extractedSalary": {"min": 95000, "max": 125000},
            "estimatedSalary": {"min": 90000, "max": 110000},
            "jobCardRequirementsModel": {
                "jobTagRequirements": [{"label": "JavaScript"}, {"label": "React"}]
            },
            "taxonomyAttributes": [
                {"label": "job-types", "attributes": [{"label": "Full-time"}]},
                {"label": "benefits", "attributes": [{"label": "Health insurance"}]}
            ],
            "salarySnippet": {"text": "$95,000 - $125,000 a year"},
            "companyBrandingAttributes": {"logoUrl": "https://cdn.example.com/initech.png"},
            "snippet": "<ul><li>5 years exp</li><li></li><li>Python</li></ul>"
        })
    }

    #[test]
    fn test_summary_fields() {
        let summary = normalize_summary(&list_entry());
        assert_eq!(summary.job_id, "30eb562caef8a2a6");
        assert_eq!(summary.job_title, "Senior JavaScript Developer");
        assert_eq!(summary.employer_name, "Initech");
        assert_eq!(summary.job_city, "Boulder, CO");
        assert!(summary.job_is_remote);
        assert_eq!(summary.job_min_salary, Some(95000.0));
        assert_eq!(summary.job_max_salary, Some(125000.0));
        assert_eq!(summary.job_required_skills, vec!["JavaScript", "React"]);
        assert_eq!(summary.job_benefits, vec!["Health insurance"]);
        assert_eq!(summary.job_apply_link, "/viewjob?jk=30eb562caef8a2a6");
        assert_eq!(summary.job_description, vec!["5 years exp", "Python"]);
    }

    #[test]
    fn test_on_site_text_is_not_remote() {
        let mut entry = list_entry();
        entry["remoteWorkModel"] = json!({"text": "On-site"});
        assert!(!normalize_summary(&entry).job_is_remote);
    }

    #[test]
    fn test_summary_defaults_on_empty_entry() {
        let summary = normalize_summary(&json!({}));
        assert_eq!(summary.job_id, "No Job ID");
        assert_eq!(summary.job_title, "Unknown Title");
        assert_eq!(summary.employer_name, "Unknown Company");
        assert_eq!(summary.job_city, "Unknown Location");
        assert!(!summary.job_is_remote);
        assert_eq!(summary.job_min_salary, None);
        assert!(summary.job_required_skills.is_empty());
        assert!(summary.job_benefits.is_empty());
        assert!(summary.job_description.is_empty());
    }

    #[test]
    fn test_salary_falls_back_to_estimate() {
        let mut entry = list_entry();
        entry["extractedSalary"] = json!(null);
        let summary = normalize_summary(&entry);
        assert_eq!(summary.job_min_salary, Some(90000.0));
        assert_eq!(summary.job_max_salary, Some(110000.0));
    }

    #[test]
    fn test_tag_requirements_fall_back_to_job_only() {
        let mut entry = list_entry();
        entry["jobCardRequirementsModel"] =
            json!({"jobOnlyRequirements": [{"label": "SQL"}]});
        assert_eq!(normalize_summary(&entry).job_required_skills, vec!["SQL"]);
    }

    #[test]
    fn test_normalize_summary_is_idempotent() {
        let entry = list_entry();
        assert_eq!(normalize_summary(&entry), normalize_summary(&entry));
    }
}
