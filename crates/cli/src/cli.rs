use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use endoflife_client::{ClientConfig, RequestContext};
use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(
    name = "endoflife",
    about = "Query end-of-life dates from endoflife.date",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "API base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "User-Agent header to send")]
    pub user_agent: Option<String>,

    #[arg(long, global = true, help = "HTTP transport timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Give up on the request after this many seconds")]
    pub deadline: Option<u64>,

    #[arg(short, long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: OutputFormat,

    #[arg(short, long, global = true, default_value = "warn", help = "Set log level")]
    pub log_level: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "List the API's top-level resources")]
    Index,

    #[command(about = "List all products")]
    Products {
        #[arg(long, help = "Include every release of every product")]
        full: bool,
    },

    #[command(about = "Show one product and its release cycles")]
    Product {
        #[arg(help = "Product name (e.g., python)")]
        name: String,
    },

    #[command(about = "Show one release cycle of a product")]
    Release {
        #[arg(help = "Product name")]
        product: String,

        #[arg(help = "Release cycle name (e.g., 3.12)")]
        release: String,
    },

    #[command(about = "Show the newest release cycle of a product")]
    Latest {
        #[arg(help = "Product name")]
        product: String,
    },

    #[command(about = "List categories, or the products in one category")]
    Categories {
        #[arg(help = "Category name")]
        name: Option<String>,
    },

    #[command(about = "List tags, or the products carrying one tag")]
    Tags {
        #[arg(help = "Tag name")]
        name: Option<String>,
    },

    #[command(about = "List identifier types, or the identifiers of one type")]
    Identifiers {
        #[arg(help = "Identifier type (e.g., purl)")]
        identifier_type: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Text,
}

impl Cli {
    /// File (or defaults), then environment, then command-line flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };

        config.apply_env()?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline.map(Duration::from_secs)
    }

    /// Context for the command's call, cancelled with `token`
    pub fn request_context(&self, token: CancellationToken) -> RequestContext {
        let ctx = RequestContext::with_cancellation(token);
        match self.deadline() {
            Some(deadline) => ctx.timeout(deadline),
            None => ctx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_release_command() {
        let cli = Cli::try_parse_from(["endoflife", "release", "python", "3.12"]).unwrap();

        match cli.command {
            Commands::Release { product, release } => {
                assert_eq!(product, "python");
                assert_eq!(release, "3.12");
            }
            other => panic!("Expected release command, got: {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "endoflife",
            "products",
            "--full",
            "--format",
            "json",
            "--deadline",
            "5",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Products { full: true }));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.deadline(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_optional_names() {
        let cli = Cli::try_parse_from(["endoflife", "tags"]).unwrap();
        assert!(matches!(cli.command, Commands::Tags { name: None }));

        let cli = Cli::try_parse_from(["endoflife", "categories", "os"]).unwrap();
        assert!(matches!(cli.command, Commands::Categories { name: Some(ref n) } if n == "os"));
    }

    #[test]
    fn test_release_requires_both_arguments() {
        assert!(Cli::try_parse_from(["endoflife", "release", "python"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/api/v1\"").unwrap();
        writeln!(file, "user_agent = \"from-file/1.0\"").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "endoflife",
            "index",
            "--config",
            path.as_str(),
            "--user-agent",
            "from-flag/1.0",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.user_agent, "from-flag/1.0");
        assert_eq!(config.timeout_secs, 30);
    }

    #[tokio::test]
    async fn test_request_context_deadline() {
        let cli = Cli::try_parse_from(["endoflife", "index", "--deadline", "5"]).unwrap();
        assert!(cli.request_context(CancellationToken::new()).get_deadline().is_some());

        let cli = Cli::try_parse_from(["endoflife", "index"]).unwrap();
        assert!(cli.request_context(CancellationToken::new()).get_deadline().is_none());
    }

    #[tokio::test]
    async fn test_huge_deadline_means_no_deadline() {
        let cli = Cli::try_parse_from(["endoflife", "index", "--deadline", "18446744073709551615"])
            .unwrap();
        let ctx = cli.request_context(CancellationToken::new());
        assert!(ctx.get_deadline().is_none());
    }

    #[test]
    fn test_zero_timeout_flag_rejected() {
        let cli = Cli::try_parse_from(["endoflife", "index", "--timeout", "0"]).unwrap();
        assert!(cli.client_config().is_err());
    }
}
