//! # Depot Core
//!
//! Core types, traits, and error definitions for Depot.
//! Everything that the data-access layer and the driver share lives here:
//! the [`Department`] entity, its typed id, the unified [`DepotError`],
//! and the tracing bootstrap.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
