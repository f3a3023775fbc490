//! Typed ID wrappers for domain entities.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for department IDs.
///
/// Ids generated by the backend on insert are always positive; parsing
/// accepts any integer so lookups of unknown ids reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub i32);

impl DepartmentId {
    /// Creates a department ID from a raw value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DepartmentId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<DepartmentId> for i32 {
    fn from(id: DepartmentId) -> Self {
        id.0
    }
}

impl TryFrom<u64> for DepartmentId {
    type Error = DepotError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i32::try_from(value)
            .map(Self)
            .map_err(|_| DepotError::internal(format!("Department id {} out of range", value)))
    }
}

impl FromStr for DepartmentId {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse()
            .map(Self)
            .map_err(|_| DepotError::invalid_input(format!("'{}' is not a department id", trimmed)))
    }
}
