mod api;
mod builder;
mod config;
mod decode;
mod transport;
mod validation;

pub use api::ApiError;
pub use builder::ErrorBuilder;
pub use config::ConfigError;
pub use decode::DecodeError;
pub use transport::TransportError;
pub use validation::ValidationError;

use std::time::Duration;
use thiserror::Error;

/// Main error type covering every way a client call can fail
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("resource not modified")]
    NotModified,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Check if the API answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_not_found())
    }

    /// Check if the API answered 429
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_rate_limited())
    }

    /// Check if the API answered 304
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Error::NotModified)
    }

    /// Check if the call never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if the caller's context cancelled the call or its deadline elapsed
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_cancelled())
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// HTTP status code of an API error.
    ///
    /// `NotModified` carries none; detect it with [`Error::is_not_modified`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Delay the server asked for before the next request.
    ///
    /// Only rate-limited errors carry one; a missing or unparsable
    /// `Retry-After` header yields `Duration::ZERO`.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::Api(e) if e.is_rate_limited() => Some(Duration::from_secs(e.retry_after)),
            _ => None,
        }
    }

    /// Check if this error indicates a temporary issue
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_temporary(),
            Error::Api(e) => e.is_temporary(),
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Transport(_) => ErrorCategory::Transport,
            Error::Api(_) => ErrorCategory::Api,
            Error::NotModified => ErrorCategory::NotModified,
            Error::Decode(_) => ErrorCategory::Decode,
            Error::Validation(_) => ErrorCategory::Validation,
            Error::Config(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for classification and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Transport,
    Api,
    NotModified,
    Decode,
    Validation,
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Transport => write!(f, "transport"),
            ErrorCategory::Api => write!(f, "api"),
            ErrorCategory::NotModified => write!(f, "not_modified"),
            ErrorCategory::Decode => write!(f, "decode"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Configuration => write!(f, "configuration"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helpers() {
        let err = ErrorBuilder::api().not_found();

        assert!(err.is_not_found());
        assert!(!err.is_rate_limited());
        assert!(!err.is_not_modified());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.retry_after(), None);
        assert_eq!(err.category(), ErrorCategory::Api);
    }

    #[test]
    fn test_rate_limited_helpers() {
        let err = ErrorBuilder::api().rate_limited(60);

        assert!(err.is_rate_limited());
        assert!(!err.is_not_found());
        assert!(err.is_temporary());
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_rate_limited_without_delay() {
        let err = ErrorBuilder::api().rate_limited(0);
        assert_eq!(err.retry_after(), Some(Duration::ZERO));
    }

    #[test]
    fn test_not_modified_is_its_own_kind() {
        let err = Error::NotModified;

        assert!(err.is_not_modified());
        assert!(!err.is_not_found());
        assert!(!err.is_rate_limited());
        assert!(!err.is_transport());
        assert!(!err.is_decode());
        assert!(!err.is_validation());
        assert_eq!(err.status(), None);
        assert_eq!(err.category(), ErrorCategory::NotModified);
        assert_eq!(err.to_string(), "resource not modified");
    }

    #[test]
    fn test_api_error_with_other_status_is_not_special() {
        let err = ErrorBuilder::api().status(500, "Internal Server Error");

        assert!(!err.is_not_found());
        assert!(!err.is_rate_limited());
        assert!(!err.is_not_modified());
        assert!(err.is_temporary());
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_cancelled_is_transport() {
        let err = ErrorBuilder::transport().cancelled();

        assert!(err.is_transport());
        assert!(err.is_cancelled());
        assert_eq!(err.status(), None);
        assert_eq!(err.category(), ErrorCategory::Transport);

        let err = ErrorBuilder::transport().deadline_exceeded();
        assert!(err.is_cancelled());
        assert!(err.is_temporary());
    }

    #[test]
    fn test_validation_error() {
        let err = ErrorBuilder::validation().argument_required("product name");

        assert!(err.is_validation());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "product name is required");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Transport.to_string(), "transport");
        assert_eq!(ErrorCategory::NotModified.to_string(), "not_modified");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}
