use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PraiasError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("no bulletin link found on {url}")]
    NoBulletinFound { url: String },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no beach rows found in bulletin")]
    NoRecords,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("failed to load coordinate table from {path}: {reason}")]
    CoordinatesLoad { path: PathBuf, reason: String },

    #[error("invalid coordinate table: {0}")]
    CoordinatesInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
