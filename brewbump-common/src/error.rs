use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BrewbumpError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("HTTP Request Error: {0}")]
    Http(#[from] Arc<reqwest::Error>),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("DownloadError: Failed to download '{0}' from '{1}': {2}")]
    DownloadError(String, String, String),

    #[error("Formula Error: {0}")]
    Formula(String),

    #[error("README Error: {0}")]
    Readme(String),

    #[error("Checksum Mismatch: {0}")]
    ChecksumMismatch(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Output Error: {0}")]
    Output(String),

    #[error("HttpError: {0}")]
    HttpError(String),
}

impl From<std::io::Error> for BrewbumpError {
    fn from(err: std::io::Error) -> Self {
        BrewbumpError::Io(Arc::new(err))
    }
}

impl From<reqwest::Error> for BrewbumpError {
    fn from(err: reqwest::Error) -> Self {
        BrewbumpError::Http(Arc::new(err))
    }
}

impl From<serde_json::Error> for BrewbumpError {
    fn from(err: serde_json::Error) -> Self {
        BrewbumpError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BrewbumpError>;
