use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a feed from being printed
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("No feed source given. Usage: rss-reader <URL> [--json] [--limit N]")]
    MissingSource,

    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("Malformed XML document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("Missing required element: {0}")]
    MissingRequiredField(&'static str),

    #[error("Failed to serialize feed as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
