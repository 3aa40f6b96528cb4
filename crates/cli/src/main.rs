use anyhow::Result;
use clap::Parser;
use endoflife_cli::{describe_error, run, Cli};
use endoflife_client::EolClient;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.client_config()?;
    let client = EolClient::from_config(&config)?;

    // Ctrl-C cancels the in-flight request
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupt received, cancelling request");
            signal_token.cancel();
        }
    });

    let ctx = cli.request_context(token);

    match run(&client, &ctx, &cli.command, cli.format).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match err.downcast_ref::<endoflife_core::Error>() {
                Some(client_err) => {
                    error!(category = %client_err.category(), "Request failed");
                    eprintln!("error: {}", describe_error(client_err));
                }
                None => eprintln!("error: {err:#}"),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
