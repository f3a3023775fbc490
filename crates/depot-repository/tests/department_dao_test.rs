//! Integration tests for MySqlDepartmentDaoImpl.
//!
//! These tests run against a real MySQL database using testcontainers.
//! They need Docker, so they are ignored by default:
//! `cargo test -p depot-repository -- --ignored`

mod common;

use common::TestDatabase;
use depot_core::{Department, DepartmentId};
use depot_repository::{DatabasePoolInterface, DepartmentDao, MySqlDepartmentDaoImpl};

fn dao(db: &TestDatabase) -> MySqlDepartmentDaoImpl {
    MySqlDepartmentDaoImpl::new(db.pool())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check() {
    let db = TestDatabase::new().await;
    db.pool().health_check().await.expect("Health check failed");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_returns_seeded_department() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let department = dao.find_by_id(DepartmentId(1)).await.expect("Query failed");

    assert_eq!(department, Department::with_id(DepartmentId(1), "Electronics"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let err = dao.find_by_id(DepartmentId(999)).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_returns_seed() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let all = dao.find_all().await.expect("Query failed");
    let mut names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
    names.sort_unstable();

    assert_eq!(names, ["Books", "Computers", "Electronics", "Fashion"]);
    assert!(all.iter().all(|d| d.id.is_some()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_assigns_id() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let mut music = Department::new("Music");
    dao.insert(&mut music).await.expect("Insert failed");

    let id = music.id.expect("Insert must assign an id");
    let found = dao.find_by_id(id).await.expect("Query failed");
    assert_eq!(found.name, "Music");
    assert_eq!(dao.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_existing() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let mut department = dao.find_by_id(DepartmentId(1)).await.unwrap();
    department.rename("Food");
    dao.update(&department).await.expect("Update failed");

    assert_eq!(dao.find_by_id(DepartmentId(1)).await.unwrap().name, "Food");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_with_unchanged_name_succeeds() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let department = dao.find_by_id(DepartmentId(2)).await.unwrap();
    dao.update(&department).await.expect("Unchanged update must succeed");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let ghost = Department::with_id(DepartmentId(999), "Ghost");
    let err = dao.update(&ghost).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_then_find() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    dao.delete_by_id(DepartmentId(4)).await.expect("Delete failed");

    assert!(dao.find_by_id(DepartmentId(4)).await.unwrap_err().is_not_found());
    assert_eq!(dao.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let dao = dao(&db);

    let err = dao.delete_by_id(DepartmentId(999)).await.unwrap_err();

    assert!(err.is_not_found());
}
