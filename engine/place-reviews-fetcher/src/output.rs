//! Writes the reviews document to disk

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::ReviewsDocument;

/// Sibling path the document is staged at before being renamed into place
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}

/// Write the document as 2-space indented JSON, replacing any previous file.
///
/// Parent directories are created as needed. The file at `path` is only
/// replaced once the full document has been written.
pub fn write_document(path: &Path, document: &ReviewsDocument) -> Result<()> {
    let json_content = serde_json::to_string_pretty(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let staging = staging_path(path);
    debug!("Staging document at {}", staging.display());
    fs::write(&staging, json_content)?;

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    info!("Saved {} reviews to {}", document.reviews.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn document(count: usize) -> ReviewsDocument {
        ReviewsDocument {
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            rating: serde_json::from_value(json!(4.5)).ok(),
            total_reviews: 42.into(),
            reviews: (0..count)
                .map(|i| Review {
                    author_name: Some(format!("author {i}")),
                    rating: serde_json::from_value(json!(5)).ok(),
                    text: Some("ok".to_string()),
                    relative_time_description: None,
                    time: json!(i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("nested").join("reviews.json");

        write_document(&path, &document(2)).unwrap();

        assert!(path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_writes_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");

        write_document(&path, &document(1)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"updatedAt\""));
        assert!(content.contains("\n    {\n      \"author_name\": \"author 0\""));

        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["totalReviews"], json!(42));
        assert_eq!(value["rating"], json!(4.5));
        assert_eq!(value["reviews"][0]["relative_time_description"], Value::Null);
    }

    #[test]
    fn test_overwrites_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reviews.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        write_document(&path, &document(3)).unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["reviews"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("data");
        fs::create_dir_all(&dir).unwrap();

        write_document(&dir.join("reviews.json"), &document(0)).unwrap();
        write_document(&dir.join("reviews.json"), &document(0)).unwrap();
    }

    #[test]
    fn test_staging_path_is_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("data/reviews.json")),
            PathBuf::from("data/.reviews.json.tmp")
        );
    }
}
