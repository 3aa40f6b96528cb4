use super::{ApiError, ConfigError, DecodeError, Error, TransportError, ValidationError};

/// Builder for creating errors with a fluent API
pub struct ErrorBuilder;

impl ErrorBuilder {
    /// Transport errors
    pub fn transport() -> TransportErrorBuilder {
        TransportErrorBuilder
    }

    /// Classified API errors
    pub fn api() -> ApiErrorBuilder {
        ApiErrorBuilder
    }

    /// Decode errors
    pub fn decode() -> DecodeErrorBuilder {
        DecodeErrorBuilder
    }

    /// Argument validation errors
    pub fn validation() -> ValidationErrorBuilder {
        ValidationErrorBuilder
    }

    /// Configuration errors
    pub fn config() -> ConfigErrorBuilder {
        ConfigErrorBuilder
    }

    /// The 304 sentinel
    pub fn not_modified() -> Error {
        Error::NotModified
    }
}

pub struct TransportErrorBuilder;

impl TransportErrorBuilder {
    pub fn request(self, source: reqwest::Error) -> Error {
        TransportError::Request(source).into()
    }

    pub fn cancelled(self) -> Error {
        TransportError::Cancelled.into()
    }

    pub fn deadline_exceeded(self) -> Error {
        TransportError::DeadlineExceeded.into()
    }
}

pub struct ApiErrorBuilder;

impl ApiErrorBuilder {
    pub fn not_found(self) -> Error {
        ApiError::not_found().into()
    }

    pub fn rate_limited(self, retry_after: u64) -> Error {
        ApiError::rate_limited(retry_after).into()
    }

    pub fn status(self, status: u16, message: impl Into<String>) -> Error {
        ApiError::new(status, message).into()
    }
}

pub struct DecodeErrorBuilder;

impl DecodeErrorBuilder {
    pub fn body(self, source: reqwest::Error) -> Error {
        DecodeError::Body(source).into()
    }

    pub fn json(self, source: serde_json::Error) -> Error {
        DecodeError::Json(source).into()
    }
}

pub struct ValidationErrorBuilder;

impl ValidationErrorBuilder {
    pub fn argument_required(self, argument: &'static str) -> Error {
        ValidationError::argument_required(argument).into()
    }
}

pub struct ConfigErrorBuilder;

impl ConfigErrorBuilder {
    pub fn invalid_base_url(self, url: impl Into<String>, reason: impl Into<String>) -> Error {
        ConfigError::invalid_base_url(url, reason).into()
    }

    pub fn invalid_field(self, field: impl Into<String>, reason: impl Into<String>) -> Error {
        ConfigError::invalid_field(field, reason).into()
    }

    pub fn transport(self, source: reqwest::Error) -> Error {
        ConfigError::Transport(source).into()
    }

    pub fn io(self, path: impl Into<String>, source: std::io::Error) -> Error {
        ConfigError::io(path, source).into()
    }

    pub fn parse_error(self, reason: impl Into<String>) -> Error {
        ConfigError::parse_error(reason).into()
    }
}
