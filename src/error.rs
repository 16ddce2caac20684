use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config Error: {0}")]
    ConfigError(String),

    #[error("{domain} domain not found in the list {known:?}")]
    DomainNotFound { domain: String, known: Vec<String> },

    #[error(r#"must be one of "A", "AAAA", "CNAME", "MX", "NS", "SOA", "SRV", "TXT""#)]
    InvalidRecordType,

    #[error("Api Error: {0}")]
    ApiError(String),

    #[error("HTTP Error: {0}")]
    HttpError(String),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err.to_string())
    }
}
