//! CLI module - Command-line interface for the application.
//!
//! - `serve` - start the HTTP server
//! - `migrate` - manage database migrations

pub mod args;

pub use args::{Cli, Commands};
