//! Turns a place details result into the published reviews document.
//!
//! Everything here is pure: no I/O, no clock reads. The caller supplies the
//! generation timestamp.

use chrono::{DateTime, Utc};
use serde_json::Number;

use crate::models::{format_updated_at, PlaceResult, RawReview, Review, ReviewsDocument};

/// Order reviews newest-first by numeric timestamp.
///
/// Reviews without a numeric timestamp keep their original index; the
/// timestamped reviews are sorted descending (stable among equal times) into
/// the remaining positions.
pub fn sort_newest_first(reviews: &mut Vec<RawReview>) {
    let timed_slots: Vec<usize> = reviews
        .iter()
        .enumerate()
        .filter(|(_, review)| review.timestamp().is_some())
        .map(|(index, _)| index)
        .collect();

    if timed_slots.len() < 2 {
        return;
    }

    let mut timed: Vec<(f64, RawReview)> = timed_slots
        .iter()
        .map(|&index| {
            let review = std::mem::take(&mut reviews[index]);
            (review.timestamp().unwrap_or_default(), review)
        })
        .collect();

    timed.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (slot, (_, review)) in timed_slots.into_iter().zip(timed) {
        reviews[slot] = review;
    }
}

/// Keep the first `limit` reviews, reduced to their published fields
pub fn project_reviews(reviews: &[RawReview], limit: usize) -> Vec<Review> {
    reviews.iter().take(limit).map(RawReview::to_review).collect()
}

fn is_non_zero(value: &Number) -> bool {
    value.as_f64().map_or(true, |v| v != 0.0)
}

/// Overall rating, with zero treated as absent
fn overall_rating(rating: Option<Number>) -> Option<Number> {
    rating.filter(is_non_zero)
}

/// Upstream total when non-zero, otherwise the number of reviews returned
fn total_reviews(upstream_total: Option<Number>, returned: usize) -> Number {
    upstream_total.filter(is_non_zero).unwrap_or_else(|| Number::from(returned))
}

/// Assemble the document from a details result
pub fn build_document(
    result: PlaceResult,
    limit: usize,
    updated_at: DateTime<Utc>,
) -> ReviewsDocument {
    let mut reviews = result.reviews.unwrap_or_default();
    sort_newest_first(&mut reviews);

    ReviewsDocument {
        updated_at: format_updated_at(updated_at),
        rating: overall_rating(result.rating),
        total_reviews: total_reviews(result.user_ratings_total, reviews.len()),
        reviews: project_reviews(&reviews, limit),
    }
}
