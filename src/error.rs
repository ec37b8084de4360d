// src/error.rs

use thiserror::Error;

/// Transport and sink failures. Anything here means "no data" for the unit
/// of work that hit it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Config(String),
}

/// Structural problems inside one experiment document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing `{0}`")]
    Missing(&'static str),

    #[error("`{path}` is not {expected}")]
    Shape { path: &'static str, expected: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
