use thiserror::Error;

/// The call never produced a usable HTTP response
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to execute request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("request deadline exceeded")]
    DeadlineExceeded,
}

impl TransportError {
    /// Check if the caller's context ended the call
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            TransportError::Cancelled | TransportError::DeadlineExceeded
        )
    }

    /// Check if this error is temporary
    pub fn is_temporary(&self) -> bool {
        match self {
            TransportError::Request(e) => e.is_timeout() || e.is_connect(),
            TransportError::DeadlineExceeded => true,
            TransportError::Cancelled => false,
        }
    }
}
