//! MySQL DAO implementations.

mod department_dao_impl;

pub use department_dao_impl::MySqlDepartmentDaoImpl;
