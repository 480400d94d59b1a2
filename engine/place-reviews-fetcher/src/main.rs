use anyhow::Context;
use place_reviews_fetcher::{initialize_logging, run_job, FetcherConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment take precedence over .env
    dotenv::dotenv().ok();

    initialize_logging()?;

    let config = FetcherConfig::from_env().context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    println!("Fetching Google Place details…");

    let summary = match run_job(config).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Reviews update failed: {}", e);
            return Err(e.into());
        }
    };

    println!("Wrote {} with {} reviews", summary.path.display(), summary.reviews_written);
    Ok(())
}
