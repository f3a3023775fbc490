//! MySQL department DAO implementation.

use crate::{dao::DepartmentDao, DatabasePoolInterface};
use async_trait::async_trait;
use depot_core::{Department, DepartmentId, DepotError, DepotResult};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const RESOURCE: &str = "Department";

/// MySQL department DAO.
#[derive(Component, Clone)]
#[shaku(interface = DepartmentDao)]
pub struct MySqlDepartmentDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlDepartmentDaoImpl {
    /// Creates a new MySQL department DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: DepartmentId) -> DepotResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department WHERE id = ?")
            .bind(id.into_inner())
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count > 0)
    }
}

/// Database row representation of a department.
#[derive(Debug, FromRow)]
struct DepartmentRow {
    id: i32,
    name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department::with_id(DepartmentId(row.id), row.name)
    }
}

#[async_trait]
impl DepartmentDao for MySqlDepartmentDaoImpl {
    async fn find_by_id(&self, id: DepartmentId) -> DepotResult<Department> {
        debug!("Finding department by id: {}", id);

        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name FROM department WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Department::from)
            .ok_or_else(|| DepotError::not_found(RESOURCE, id))
    }

    async fn find_all(&self) -> DepotResult<Vec<Department>> {
        debug!("Finding all departments");

        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name FROM department ORDER BY name",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn insert(&self, department: &mut Department) -> DepotResult<()> {
        department.ensure_insertable()?;
        debug!("Inserting department: {}", department.name);

        let result = sqlx::query("INSERT INTO department (name) VALUES (?)")
            .bind(&department.name)
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DepotError::internal("Insert reported no affected rows"));
        }

        department.id = Some(DepartmentId::try_from(result.last_insert_id())?);
        Ok(())
    }

    async fn update(&self, department: &Department) -> DepotResult<()> {
        let id = department.ensure_updatable()?;
        debug!("Updating department: {}", id);

        let result = sqlx::query("UPDATE department SET name = ? WHERE id = ?")
            .bind(&department.name)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        // MySQL counts changed rows, so an unchanged name also reports zero.
        if result.rows_affected() == 0 && !self.exists(id).await? {
            return Err(DepotError::not_found(RESOURCE, id));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: DepartmentId) -> DepotResult<()> {
        debug!("Deleting department: {}", id);

        let result = sqlx::query("DELETE FROM department WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(DepotError::not_found(RESOURCE, id));
        }

        Ok(())
    }
}

impl std::fmt::Debug for MySqlDepartmentDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDepartmentDaoImpl").finish_non_exhaustive()
    }
}
