use endoflife_core::{ErrorBuilder, Result};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Map an HTTP status to success or a classified error.
///
/// Runs before the body is touched so error responses never reach the
/// success-shaped decoder.
pub(crate) fn classify_response(status: StatusCode, headers: &HeaderMap) -> Result<()> {
    match status {
        StatusCode::OK | StatusCode::MOVED_PERMANENTLY => Ok(()),
        StatusCode::NOT_MODIFIED => Err(ErrorBuilder::not_modified()),
        StatusCode::NOT_FOUND => Err(ErrorBuilder::api().not_found()),
        StatusCode::TOO_MANY_REQUESTS => {
            Err(ErrorBuilder::api().rate_limited(parse_retry_after(headers)))
        }
        other => Err(ErrorBuilder::api().status(other.as_u16(), reason_phrase(other))),
    }
}

/// Seconds from a `Retry-After` header, 0 when missing or not an integer
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("unknown status")
}

/// Parse a fully read success body into the caller's shape
pub(crate) fn decode_json<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| ErrorBuilder::decode().json(e))
}
