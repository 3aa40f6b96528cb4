use std::time::Duration;

/// Default base URL for the endoflife.date API
pub const DEFAULT_BASE_URL: &str = "https://endoflife.date/api/v1";

/// Default timeout for the built-in HTTP transport (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("endoflife-rs/", env!("CARGO_PKG_VERSION"));

/// Path segment the API accepts in place of a release name
pub const LATEST_RELEASE: &str = "latest";

pub fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}
