//! Typed async client for the [endoflife.date](https://endoflife.date) API.
//!
//! ```no_run
//! use endoflife_client::{EolClient, RequestContext};
//!
//! # async fn run() -> endoflife_core::Result<()> {
//! let client = EolClient::new()?;
//! let ctx = RequestContext::background();
//!
//! let products = client.products(&ctx).await?;
//! for product in &products {
//!     println!("{}", product.name);
//! }
//!
//! match client.product(&ctx, "python").await {
//!     Ok(python) => println!("{} releases", python.result.releases.len()),
//!     Err(e) if e.is_not_found() => println!("no such product"),
//!     Err(e) if e.is_rate_limited() => println!("slow down: {:?}", e.retry_after()),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod endpoints;
mod error_handling;
pub mod pipeline;

pub use client::{ClientOption, EolClient, EolClientBuilder};
pub use config::ClientConfig;
pub use context::RequestContext;
pub use pipeline::Pipeline;
pub use reqwest::Method;
