use reqwest::{Client, Url};
use tracing::{debug, error, info};

use crate::config::FetcherConfig;
use crate::error::{FetcherError, Result};
use crate::models::{PlaceDetailsResponse, PlaceResult};

/// Reported in place of the API status when the body has none
const MISSING_STATUS: &str = "<missing>";

/// Google Places details client
pub struct PlacesFetcher {
    config: FetcherConfig,
    client: Client,
}

impl PlacesFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Details request URL with `place_id`, `fields` and `key` query parameters
    pub fn details_url(&self) -> Result<Url> {
        let places = &self.config.places;
        Url::parse_with_params(
            &places.api_url,
            &[
                ("place_id", places.place_id.as_str()),
                ("fields", places.fields.as_str()),
                ("key", places.api_key.as_str()),
            ],
        )
        .map_err(|e| {
            let msg = format!("Invalid Places API URL {}: {}", places.api_url, e);
            FetcherError::invalid_config(msg)
        })
    }

    /// Fetch the details result for the configured place.
    ///
    /// Fails on a non-success HTTP status and on any API status other than
    /// "OK". A missing `result` object yields an empty one.
    pub async fn fetch_place_details(&self) -> Result<PlaceResult> {
        let url = self.details_url()?;

        info!("Fetching place details for {}", self.config.places.place_id);
        debug!("Requesting {}", self.config.places.api_url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Places API request failed with status: {}", status);
            return Err(FetcherError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let details: PlaceDetailsResponse = response.json().await?;

        if !details.is_ok() {
            let status = details.status.unwrap_or_else(|| MISSING_STATUS.to_string());
            error!("Places API returned status {}", status);
            return Err(FetcherError::UpstreamStatus { status, message: details.error_message });
        }

        let result = details.into_result()?;
        info!(
            "Successfully fetched place details with {} reviews",
            result.reviews.as_ref().map_or(0, Vec::len)
        );
        Ok(result)
    }
}
