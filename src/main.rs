use anyhow::Result;
use clap::{Parser, Subcommand};
use job_harvest::{
    start_web_server, EnvironmentConfig, FetchConfig, ProxySupplier, SiteScraper,
};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "jobharvest")]
#[command(about = "Scrape job listings and details through rotating proxies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve,
    /// Fetch one page of search results and print it as JSON
    Jobs {
        #[arg(long, default_value = "software engineer")]
        role: String,
        #[arg(long, default_value = "remote")]
        location: String,
    },
    /// Fetch one job-detail record and print it as JSON
    Job { job_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("job_harvest=info,rocket::server=off")),
        )
        .init();

    let environment = EnvironmentConfig::load()?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let port = std::env::var("ROCKET_PORT")
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT environment variable not set"))?
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;

            start_web_server(environment, port).await
        }
        Command::Jobs { role, location } => {
            let supplier = ProxySupplier::new(
                environment.proxy_api_url.clone(),
                environment.proxy_api_token.clone(),
            )?;
            let scraper =
                SiteScraper::new(environment.scrape_base_url.clone(), FetchConfig::default());

            let proxies = supplier.fetch_proxies().await?;
            let jobs = scraper.search_jobs(&role, &location, &proxies).await?;

            println!("{}", serde_json::to_string_pretty(&jobs)?);
            Ok(())
        }
        Command::Job { job_id } => {
            let supplier = ProxySupplier::new(
                environment.proxy_api_url.clone(),
                environment.proxy_api_token.clone(),
            )?;
            let scraper =
                SiteScraper::new(environment.scrape_base_url.clone(), FetchConfig::default());

            let proxies = supplier.fetch_proxies().await?;
            let job = scraper.job_detail(&job_id, &proxies).await?;

            println!("{}", serde_json::to_string_pretty(&job)?);
            Ok(())
        }
    }
}
