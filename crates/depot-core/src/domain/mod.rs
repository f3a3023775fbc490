//! Domain entities for Depot.

pub mod entities;

pub use entities::*;
