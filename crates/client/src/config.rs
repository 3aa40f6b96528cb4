use crate::client::ClientOption;
use endoflife_core::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use endoflife_core::{ErrorBuilder, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "ENDOFLIFE_BASE_URL";
/// Environment variable overriding the user agent
pub const ENV_USER_AGENT: &str = "ENDOFLIFE_USER_AGENT";
/// Environment variable overriding the transport timeout, in seconds
pub const ENV_TIMEOUT_SECS: &str = "ENDOFLIFE_TIMEOUT_SECS";

/// Client settings loadable from TOML and the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API, including the version prefix
    pub base_url: String,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Timeout for the built-in HTTP transport
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ErrorBuilder::config().parse_error(e.to_string()))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ErrorBuilder::config().parse_error(e.to_string()))
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ErrorBuilder::config().io(path.display().to_string(), e))?;
        Self::from_toml(&content)
    }

    /// Override fields from the `ENDOFLIFE_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            self.user_agent = user_agent;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                ErrorBuilder::config()
                    .invalid_field(ENV_TIMEOUT_SECS, format!("not a number of seconds: {timeout}"))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ErrorBuilder::config().invalid_field("base_url", "cannot be empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ErrorBuilder::config().invalid_field("user_agent", "cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ErrorBuilder::config().invalid_field(
                "timeout_secs",
                "must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Construction directives equivalent to this configuration
    pub fn to_options(&self) -> Vec<ClientOption> {
        vec![
            ClientOption::BaseUrl(self.base_url.clone()),
            ClientOption::UserAgent(self.user_agent.clone()),
            ClientOption::Timeout(self.timeout()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EolClient;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_configuration() {
        let config = ClientConfig::new();

        assert_eq!(config.base_url, "https://endoflife.date/api/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("endoflife-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClientConfig {
            base_url: "https://mirror.example.com/api/v1".to_string(),
            user_agent: "my-app/1.0".to_string(),
            timeout_secs: 10,
        };

        let toml_str = config.to_toml().expect("Failed to serialize to TOML");
        assert!(toml_str.contains("base_url"));

        let parsed = ClientConfig::from_toml(&toml_str).expect("Failed to parse TOML");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_config() {
        let config = ClientConfig::from_toml(r#"user_agent = "my-app/2.0""#).unwrap();

        assert_eq!(config.user_agent, "my-app/2.0");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ClientConfig::from_toml("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, endoflife_core::Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/api/v1\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ClientConfig::new();
        config
            .apply_env_from(lookup_from(&[
                (ENV_BASE_URL, "http://localhost:1234"),
                (ENV_TIMEOUT_SECS, " 12 "),
            ]))
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_env_invalid_timeout() {
        let mut config = ClientConfig::new();
        let err = config
            .apply_env_from(lookup_from(&[(ENV_TIMEOUT_SECS, "thirty")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ClientConfig::new();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::new();
        config.user_agent = String::new();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::new();
        config.base_url = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_from_config() {
        let config = ClientConfig {
            base_url: "http://localhost:9000/api/v1".to_string(),
            user_agent: "cfg/1.0".to_string(),
            timeout_secs: 3,
        };

        let client = EolClient::from_config(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9000/api/v1");
        assert_eq!(client.user_agent(), "cfg/1.0");
    }
}
