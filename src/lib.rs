//! ERP API - users, companies and positions behind a JSON HTTP API.
//!
//! # Layers
//!
//! - **cli** / **commands**: command-line entry points
//! - **config**: environment configuration, constants, resource policies
//! - **domain**: entities, natural keys, the credential codec
//! - **services**: token issuing, the shared soft-delete lifecycle, use cases
//! - **infra**: SeaORM connection, migrations and stores
//! - **api**: axum routes, handlers, extractors and middleware
//! - **types**: the response envelope
//! - **errors**: `AppError` and its HTTP mapping
//!
//! ```bash
//! cargo run -- migrate up
//! cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

pub use api::AppState;
pub use config::Config;
pub use domain::{Company, Password, Position, User};
pub use errors::{AppError, AppResult};
