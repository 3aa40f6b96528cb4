pub mod cli;
pub mod commands;
pub mod output;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::{describe_error, run};
