//! Application configuration module
//!
//! Handles environment variables, per-resource policies and
//! application-wide constants.

mod constants;
mod policy;
mod settings;

pub use constants::*;
pub use policy::ResourcePolicy;
pub use settings::Config;
