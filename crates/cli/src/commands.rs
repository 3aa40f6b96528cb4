use crate::cli::{Commands, OutputFormat};
use crate::output::render;
use endoflife_client::{EolClient, RequestContext};
use endoflife_core::Error;
use tracing::debug;

/// Run one subcommand and render its response
pub async fn run(
    client: &EolClient,
    ctx: &RequestContext,
    command: &Commands,
    format: OutputFormat,
) -> anyhow::Result<String> {
    debug!(?command, "Running command");

    let rendered = match command {
        Commands::Index => render(&client.index(ctx).await?, format)?,
        Commands::Products { full: false } => render(&client.products(ctx).await?, format)?,
        Commands::Products { full: true } => render(&client.products_full(ctx).await?, format)?,
        Commands::Product { name } => render(&client.product(ctx, name).await?, format)?,
        Commands::Release { product, release } => {
            render(&client.release(ctx, product, release).await?, format)?
        }
        Commands::Latest { product } => render(&client.latest_release(ctx, product).await?, format)?,
        Commands::Categories { name: None } => render(&client.categories(ctx).await?, format)?,
        Commands::Categories { name: Some(name) } => {
            render(&client.category_products(ctx, name).await?, format)?
        }
        Commands::Tags { name: None } => render(&client.tags(ctx).await?, format)?,
        Commands::Tags { name: Some(name) } => render(&client.tag_products(ctx, name).await?, format)?,
        Commands::Identifiers {
            identifier_type: None,
        } => render(&client.identifiers(ctx).await?, format)?,
        Commands::Identifiers {
            identifier_type: Some(kind),
        } => render(&client.identifier_details(ctx, kind).await?, format)?,
    };

    Ok(rendered)
}

/// One-line explanation of a client error for the terminal
pub fn describe_error(err: &Error) -> String {
    if err.is_not_found() {
        return "not found: check the product, release, category or tag name".to_string();
    }
    if let Some(delay) = err.retry_after() {
        return if delay.is_zero() {
            "rate limited by endoflife.date, try again later".to_string()
        } else {
            format!(
                "rate limited by endoflife.date, retry in {} seconds",
                delay.as_secs()
            )
        };
    }
    if err.is_cancelled() {
        return format!("request aborted: {err}");
    }
    format!("{} error: {err}", err.category())
}
