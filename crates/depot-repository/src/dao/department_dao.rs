//! DepartmentDao trait: data access abstraction for departments.
//!
//! Implementations connect directly to a single data source and never
//! perform console I/O.

use async_trait::async_trait;
use depot_core::{Department, DepartmentId, DepotResult, Interface};

/// Department data access object.
#[async_trait]
pub trait DepartmentDao: Interface + Send + Sync {
    /// Finds a department by ID.
    ///
    /// Fails with `NotFound` when no record has this id.
    async fn find_by_id(&self, id: DepartmentId) -> DepotResult<Department>;

    /// Returns every stored department. Order is backend-defined.
    async fn find_all(&self) -> DepotResult<Vec<Department>>;

    /// Persists a new department and writes the generated id into it.
    ///
    /// Fails with `Validation` if the department already has an id.
    async fn insert(&self, department: &mut Department) -> DepotResult<()>;

    /// Overwrites the stored record with the department's fields.
    ///
    /// Fails with `Validation` without an id, `NotFound` for an unknown id.
    async fn update(&self, department: &Department) -> DepotResult<()>;

    /// Deletes a department by ID.
    ///
    /// Fails with `NotFound` when no record has this id.
    async fn delete_by_id(&self, id: DepartmentId) -> DepotResult<()>;
}
