// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, routes, Request, Response, State};
use tracing::info;

use crate::config::FetchConfig;
use crate::environment::EnvironmentConfig;
use crate::proxy::ProxySupplier;
use crate::scrape::SiteScraper;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/get-jobs?<role>&<location>")]
pub async fn get_jobs(
    role: Option<String>,
    location: Option<String>,
    supplier: &State<ProxySupplier>,
    scraper: &State<SiteScraper>,
) -> Json<JobsResponse> {
    handlers::get_jobs_handler(role, location, supplier, scraper).await
}

#[get("/get-job/<job_id>")]
pub async fn get_job(
    job_id: String,
    supplier: &State<ProxySupplier>,
    scraper: &State<SiteScraper>,
) -> Result<Json<JobDetailResponse>, status::Custom<Json<ErrorResponse>>> {
    handlers::get_job_handler(job_id, supplier, scraper).await
}

#[get("/")]
pub async fn home() -> &'static str {
    handlers::health_handler().await
}

#[get("/health-check")]
pub async fn health_check() -> &'static str {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Invalid request format".to_string(),
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "Internal server error".to_string(),
    })
}

// Main server start function
pub async fn start_web_server(environment: EnvironmentConfig, port: u16) -> Result<()> {
    let supplier = ProxySupplier::new(
        environment.proxy_api_url.clone(),
        environment.proxy_api_token.clone(),
    )?;
    let scraper = SiteScraper::new(environment.scrape_base_url.clone(), FetchConfig::default());

    info!("Starting job scraper API server on port {}", port);

    let figment = rocket::Config::figment().merge(("port", port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(supplier)
        .manage(scraper)
        .register("/", catchers![bad_request, internal_error])
        .mount(
            "/",
            routes![get_jobs, get_job, home, health_check, options],
        )
        .launch()
        .await?;

    Ok(())
}
