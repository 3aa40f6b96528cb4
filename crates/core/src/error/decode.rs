use thiserror::Error;

/// A success response whose body could not be turned into the expected shape
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to unmarshal response: {0}")]
    Json(#[from] serde_json::Error),
}
