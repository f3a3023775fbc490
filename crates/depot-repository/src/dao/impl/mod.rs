//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module.
//! Implementations are organized by technology.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryDepartmentDao;
pub use mysql::MySqlDepartmentDaoImpl;
