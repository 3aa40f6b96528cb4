use std::fmt;

/// Message attached to 404 responses
pub const NOT_FOUND_MESSAGE: &str = "resource not found";

/// Message attached to 429 responses
pub const RATE_LIMITED_MESSAGE: &str = "rate limit exceeded";

/// Non-success HTTP status returned by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Seconds to wait before retrying, 0 when the server gave no usable hint
    pub retry_after: u64,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            retry_after: 0,
        }
    }

    pub fn not_found() -> Self {
        Self::new(404, NOT_FOUND_MESSAGE)
    }

    pub fn rate_limited(retry_after: u64) -> Self {
        Self {
            retry_after,
            ..Self::new(429, RATE_LIMITED_MESSAGE)
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Check if this error is temporary
    pub fn is_temporary(&self) -> bool {
        self.is_rate_limited() || self.status >= 500
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.retry_after > 0 {
            write!(
                f,
                "API error: {} {} (retry after {} seconds)",
                self.status, self.message, self.retry_after
            )
        } else {
            write!(f, "API error: {} {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiError {}
