//! # Depot Config
//!
//! Configuration management for Depot.
//! Supports layered configuration from TOML files and environment
//! variables, validated before anything touches the backend.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
