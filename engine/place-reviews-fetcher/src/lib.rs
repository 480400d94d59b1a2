//! Place Reviews Fetcher
//!
//! Fetches a place's rating and reviews from the Google Places details API and
//! writes them to a JSON document for static consumers. One run performs one
//! request and at most one file write.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod job;
pub mod logging;
pub mod models;
pub mod output;
pub mod shaping;

pub use config::FetcherConfig;
pub use error::{FetcherError, Result};
pub use fetcher::PlacesFetcher;
pub use job::{run_job, JobSummary};
pub use logging::initialize_logging;
pub use models::*;
