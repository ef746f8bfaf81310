use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Unexpected response from {url}: status {status}")]
    Api { url: String, status: u16 },
}

impl FetchError {
    pub fn config(msg: &str) -> FetchError {
        FetchError::Config(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
