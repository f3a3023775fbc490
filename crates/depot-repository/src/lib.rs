//! # Depot Repository
//!
//! Data access for the `department` table:
//!
//! ```text
//! Driver
//!   ↓  Arc<dyn DepartmentDao>     (DAO interface)
//! MySqlDepartmentDaoImpl          (DAO impl, MySQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! [`InMemoryDepartmentDao`] implements the same contract without a
//! database and backs the `memory` backend.

pub mod dao;
pub mod pool;

pub use dao::{DepartmentDao, InMemoryDepartmentDao, MySqlDepartmentDaoImpl};
pub use pool::*;

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::{Department, DepartmentId};
    use std::sync::Arc;

    // =============================================================================
    // DepartmentDao contract, exercised through a trait object
    // =============================================================================

    fn dao() -> Arc<dyn DepartmentDao> {
        Arc::new(InMemoryDepartmentDao::seeded())
    }

    #[tokio::test]
    async fn test_find_by_id_returns_seed() {
        let dao = dao();
        let department = dao.find_by_id(DepartmentId(1)).await.unwrap();
        assert_eq!(department.name, "Electronics");
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_round_trips() {
        let dao = dao();
        let mut music = Department::new("Music");

        dao.insert(&mut music).await.unwrap();

        let id = music.id.expect("insert must assign an id");
        let found = dao.find_by_id(id).await.unwrap();
        assert_eq!(found, music);
    }

    #[tokio::test]
    async fn test_find_all_has_no_duplicates_or_omissions() {
        let dao = dao();
        let before = dao.find_all().await.unwrap().len();

        let mut music = Department::new("Music");
        dao.insert(&mut music).await.unwrap();
        dao.delete_by_id(DepartmentId(2)).await.unwrap();

        let all = dao.find_all().await.unwrap();
        assert_eq!(all.len(), before);
        assert!(all.contains(&music));
        assert!(all.iter().all(|d| d.id != Some(DepartmentId(2))));

        let mut ids: Vec<_> = all.iter().filter_map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[tokio::test]
    async fn test_update_then_find() {
        let dao = dao();
        let mut department = dao.find_by_id(DepartmentId(1)).await.unwrap();
        department.rename("Food");

        dao.update(&department).await.unwrap();

        assert_eq!(dao.find_by_id(DepartmentId(1)).await.unwrap().name, "Food");
    }

    #[tokio::test]
    async fn test_delete_then_find_is_not_found() {
        let dao = dao();
        dao.delete_by_id(DepartmentId(3)).await.unwrap();

        let err = dao.find_by_id(DepartmentId(3)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let dao = dao();
        let err = dao.delete_by_id(DepartmentId(999)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dao = dao();
        let ghost = Department::with_id(DepartmentId(999), "Ghost");
        let err = dao.update(&ghost).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
