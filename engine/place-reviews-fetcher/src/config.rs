use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FetcherError, Result};

/// Environment variable holding the Google Places API key
pub const API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

/// Environment variable holding the place to fetch reviews for
pub const PLACE_ID_ENV: &str = "PLACE_ID";

/// Optional override for the details endpoint
pub const API_URL_ENV: &str = "PLACES_API_URL";

/// Optional override for the output file
pub const OUTPUT_PATH_ENV: &str = "REVIEWS_OUTPUT_PATH";

pub const DEFAULT_API_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
pub const DEFAULT_OUTPUT_PATH: &str = "data/reviews.json";

/// Response fields requested from the details endpoint
pub const DETAIL_FIELDS: &str = "rating,user_ratings_total,reviews";

/// Upper bound on reviews kept in the output document
pub const MAX_REVIEWS: usize = 20;

/// Configuration for the place reviews fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Google Places API configuration
    pub places: PlacesApiConfig,

    /// Output document configuration
    pub output: OutputConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PlacesApiConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,

    /// Place identifier sent as the `place_id` query parameter
    pub place_id: String,

    /// Details endpoint URL
    pub api_url: String,

    /// Comma-separated `fields` selection
    pub fields: String,
}

// Keeps the key out of logged configuration
impl std::fmt::Debug for PlacesApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesApiConfig")
            .field("api_key", &"<redacted>")
            .field("place_id", &self.place_id)
            .field("api_url", &self.api_url)
            .field("fields", &self.fields)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination of the JSON document
    pub path: PathBuf,

    /// Maximum number of reviews written
    pub max_reviews: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_OUTPUT_PATH), max_reviews: MAX_REVIEWS }
    }
}

impl FetcherConfig {
    /// Build a configuration from the two required values, everything else defaulted
    pub fn new(api_key: impl Into<String>, place_id: impl Into<String>) -> Self {
        Self {
            places: PlacesApiConfig {
                api_key: api_key.into(),
                place_id: place_id.into(),
                api_url: DEFAULT_API_URL.to_string(),
                fields: DETAIL_FIELDS.to_string(),
            },
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as missing. The API key is checked first, so when
    /// both are absent the error names `GOOGLE_PLACES_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| FetcherError::missing_config(name))
        };

        let api_key = required(API_KEY_ENV)?;
        let place_id = required(PLACE_ID_ENV)?;

        let mut config = Self::new(api_key, place_id);

        // Override with environment variables if present
        if let Some(api_url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            config.places.api_url = api_url;
        }

        if let Some(path) = lookup(OUTPUT_PATH_ENV).filter(|v| !v.is_empty()) {
            config.output.path = PathBuf::from(path);
        }

        Ok(config)
    }
}
