//! Shared helpers for the endoflife.date client integration tests.

pub mod common;

pub use endoflife_client::{ClientOption, EolClient, RequestContext};
pub use endoflife_core::{Date, Error};
pub use serde_json::{json, Value};
pub use std::sync::Arc;
pub use std::time::Duration;
