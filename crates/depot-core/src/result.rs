//! Result type aliases for Depot.

use crate::DepotError;

/// A specialized `Result` type for Depot operations.
pub type DepotResult<T> = Result<T, DepotError>;
