//! In-memory department DAO.

use crate::dao::DepartmentDao;
use async_trait::async_trait;
use depot_core::{Department, DepartmentId, DepotError, DepotResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

const RESOURCE: &str = "Department";

/// Rows loaded by [`InMemoryDepartmentDao::seeded`], matching the initial migration.
pub const SEED_DEPARTMENTS: &[&str] = &["Electronics", "Computers", "Fashion", "Books"];

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<DepartmentId, String>,
    last_id: i32,
}

/// Department DAO backed by a process-local map.
///
/// Ids come from a sequence that never rewinds, so a deleted id is not
/// handed out again.
#[derive(Debug, Default)]
pub struct InMemoryDepartmentDao {
    store: Mutex<Store>,
}

impl InMemoryDepartmentDao {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding [`SEED_DEPARTMENTS`] with ids 1, 2, ...
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_names(SEED_DEPARTMENTS.iter().copied())
    }

    /// Creates a store holding the given names with ids 1, 2, ...
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Store::default();
        for name in names {
            store.last_id += 1;
            store.rows.insert(DepartmentId(store.last_id), name.into());
        }
        Self {
            store: Mutex::new(store),
        }
    }

    /// Number of stored departments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().rows.len()
    }

    /// Returns true when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DepartmentDao for InMemoryDepartmentDao {
    async fn find_by_id(&self, id: DepartmentId) -> DepotResult<Department> {
        debug!("Finding department by id: {}", id);
        self.store
            .lock()
            .rows
            .get(&id)
            .map(|name| Department::with_id(id, name.clone()))
            .ok_or_else(|| DepotError::not_found(RESOURCE, id))
    }

    async fn find_all(&self) -> DepotResult<Vec<Department>> {
        debug!("Finding all departments");
        Ok(self
            .store
            .lock()
            .rows
            .iter()
            .map(|(id, name)| Department::with_id(*id, name.clone()))
            .collect())
    }

    async fn insert(&self, department: &mut Department) -> DepotResult<()> {
        department.ensure_insertable()?;
        debug!("Inserting department: {}", department.name);

        let mut store = self.store.lock();
        store.last_id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| DepotError::internal("Department id sequence exhausted"))?;
        let id = DepartmentId(store.last_id);
        store.rows.insert(id, department.name.clone());
        department.id = Some(id);
        Ok(())
    }

    async fn update(&self, department: &Department) -> DepotResult<()> {
        let id = department.ensure_updatable()?;
        debug!("Updating department: {}", id);

        let mut store = self.store.lock();
        let name = store
            .rows
            .get_mut(&id)
            .ok_or_else(|| DepotError::not_found(RESOURCE, id))?;
        name.clone_from(&department.name);
        Ok(())
    }

    async fn delete_by_id(&self, id: DepartmentId) -> DepotResult<()> {
        debug!("Deleting department: {}", id);
        self.store
            .lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DepotError::not_found(RESOURCE, id))
    }
}
