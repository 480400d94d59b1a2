use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Status value the Places API uses for a successful lookup
pub const STATUS_OK: &str = "OK";

/// Google Places details response envelope.
///
/// `result` stays untyped until `status` has been checked, so a failed lookup
/// is reported by its status whatever else the body carries.
#[derive(Debug, Deserialize, Clone)]
pub struct PlaceDetailsResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub result: Option<Value>,
}

/// The `result` object of a details response
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlaceResult {
    #[serde(default)]
    pub rating: Option<Number>,

    #[serde(default)]
    pub user_ratings_total: Option<Number>,

    #[serde(default)]
    pub reviews: Option<Vec<RawReview>>,
}

/// A review as received from the Places API.
///
/// Unknown upstream fields (profile photo, language, ...) are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawReview {
    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub rating: Option<Number>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub relative_time_description: Option<String>,

    /// Seconds since epoch; not guaranteed to be a number
    #[serde(default)]
    pub time: Value,
}

/// A review as written to the output document
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Review {
    pub author_name: Option<String>,
    pub rating: Option<Number>,
    pub text: Option<String>,
    pub relative_time_description: Option<String>,
    pub time: Value,
}

/// The persisted reviews document
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsDocument {
    /// Generation time, ISO-8601 with millisecond precision
    pub updated_at: String,

    pub rating: Option<Number>,

    pub total_reviews: Number,

    pub reviews: Vec<Review>,
}

impl PlaceDetailsResponse {
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some(STATUS_OK)
    }

    /// Decode the `result` object, an absent or null one yielding an empty result
    pub fn into_result(self) -> serde_json::Result<PlaceResult> {
        match self.result {
            None | Some(Value::Null) => Ok(PlaceResult::default()),
            Some(result) => serde_json::from_value(result),
        }
    }
}

impl RawReview {
    /// Timestamp as a number, `None` when absent or not numeric
    pub fn timestamp(&self) -> Option<f64> {
        self.time.as_f64()
    }

    /// Reduce to the five published fields
    pub fn to_review(&self) -> Review {
        Review {
            author_name: self.author_name.clone(),
            rating: self.rating.clone(),
            text: self.text.clone(),
            relative_time_description: self.relative_time_description.clone(),
            time: self.time.clone(),
        }
    }
}

/// Format a generation timestamp the way the document stores it
pub fn format_updated_at(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
