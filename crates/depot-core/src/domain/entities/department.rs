//! Department entity.

use crate::validation::rules;
use crate::{DepartmentId, DepotError, DepotResult, Entity, ValidateExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Maximum length of a department name, matching the `department.name` column.
pub const DEPARTMENT_NAME_MAX_LEN: usize = 60;

/// `DEPARTMENT_NAME_MAX_LEN` as `u64`, the type the `validator` derive expects.
const DEPARTMENT_NAME_MAX_LEN_U64: u64 = DEPARTMENT_NAME_MAX_LEN as u64;

/// A department record.
///
/// `id` is `None` until the record has been inserted; the backend assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Department {
    /// Backend-assigned identifier.
    pub id: Option<DepartmentId>,

    /// Display name.
    #[validate(length(min = 1, max = DEPARTMENT_NAME_MAX_LEN_U64))]
    pub name: String,
}

impl Department {
    /// Creates a department that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a department with a known identifier, as loaded from storage.
    #[must_use]
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Replaces the department name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Checks the field rules that apply before any write.
    pub fn validate_fields(&self) -> DepotResult<()> {
        self.validate_entity()?;
        rules::not_blank(&self.name)
            .map_err(|_| DepotError::validation("name: must not be blank"))
    }

    /// Checks that this department can be inserted.
    pub fn ensure_insertable(&self) -> DepotResult<()> {
        if self.is_persisted() {
            return Err(DepotError::validation("department is already persisted"));
        }
        self.validate_fields()
    }

    /// Checks that this department can be updated and returns its id.
    pub fn ensure_updatable(&self) -> DepotResult<DepartmentId> {
        let id = Entity::id(self)
            .ok_or_else(|| DepotError::validation("cannot update a department without an id"))?;
        self.validate_fields()?;
        Ok(id)
    }
}

impl Entity for Department {
    type Id = DepartmentId;

    fn id(&self) -> Option<DepartmentId> {
        self.id
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Department #{}: {}", id, self.name),
            None => write!(f, "Department (unsaved): {}", self.name),
        }
    }
}
