// Error types for folio.
// Covers catalog fetching and parsing, configuration, and terminal IO.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Catalog fetch returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
