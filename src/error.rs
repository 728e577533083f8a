use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GanfetchError>;

#[derive(Error, Debug)]
pub enum GanfetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("No datasets listed at {url}")]
    EmptyCatalog { url: String },

    #[error("Invalid selection '{input}': {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("Unknown File Type: {name}")]
    UnsupportedArchive { name: String },

    #[error("Failed to read archive {path}: {message}")]
    ArchiveError { path: PathBuf, message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration directory not found")]
    ConfigDirectoryNotFound,
}

impl GanfetchError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        GanfetchError::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid_selection<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        GanfetchError::InvalidSelection {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn network(url: &str, source: reqwest::Error) -> Self {
        GanfetchError::Network {
            url: url.to_string(),
            source,
        }
    }
}
