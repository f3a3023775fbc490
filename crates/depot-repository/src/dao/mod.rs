//! DAO (Data Access Object) layer.
//!
//! Each DAO interface maps to one entity; each implementation to one data
//! source.

pub mod department_dao;
pub mod r#impl;

pub use department_dao::DepartmentDao;
pub use r#impl::{InMemoryDepartmentDao, MySqlDepartmentDaoImpl};
