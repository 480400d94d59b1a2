use chrono::{DateTime, Utc};
use serde_json::Number;
use std::path::PathBuf;
use tracing::info;

use crate::config::FetcherConfig;
use crate::error::Result;
use crate::fetcher::PlacesFetcher;
use crate::output::write_document;
use crate::shaping::build_document;

/// Outcome of a successful fetch-and-persist run
#[derive(Debug, Clone)]
pub struct JobSummary {
    /// Number of reviews written to the document
    pub reviews_written: usize,

    /// Total review count recorded in the document
    pub total_reviews: Number,

    /// Where the document was written
    pub path: PathBuf,

    pub timestamp: DateTime<Utc>,
}

/// Fetch the place details, shape them and write the reviews document.
///
/// Nothing is written unless the fetch and both status checks succeed.
pub async fn run_job(config: FetcherConfig) -> Result<JobSummary> {
    let fetcher = PlacesFetcher::new(config)?;
    let result = fetcher.fetch_place_details().await?;

    let output = &fetcher.config().output;
    let timestamp = Utc::now();
    let document = build_document(result, output.max_reviews, timestamp);

    write_document(&output.path, &document)?;

    info!(
        "Reviews document updated: {} of {} reviews",
        document.reviews.len(),
        document.total_reviews
    );

    Ok(JobSummary {
        reviews_written: document.reviews.len(),
        total_reviews: document.total_reviews.clone(),
        path: output.path.clone(),
        timestamp,
    })
}
