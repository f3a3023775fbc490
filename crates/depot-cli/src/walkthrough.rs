//! The five-step department walkthrough.
//!
//! Each step calls one DAO operation, in order, and reports the outcome on
//! the console. The first failure ends the walkthrough.

use crate::Console;
use depot_config::WalkthroughConfig;
use depot_core::{Department, DepartmentId, DepotError, DepotResult};
use depot_repository::DepartmentDao;
use std::io::{BufRead, Write};
use tracing::info;

/// What the walkthrough changed in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughReport {
    /// Id assigned to the department inserted in step three.
    pub inserted_id: DepartmentId,
    /// Id of the department renamed in step four.
    pub updated_id: DepartmentId,
    /// Id entered by the operator and deleted in step five.
    pub deleted_id: DepartmentId,
}

/// Runs the walkthrough against `dao`, talking to the operator through `console`.
pub async fn run_walkthrough<R, W>(
    dao: &dyn DepartmentDao,
    config: &WalkthroughConfig,
    console: &mut Console<R, W>,
) -> DepotResult<WalkthroughReport>
where
    R: BufRead,
    W: Write,
{
    console.heading("Step 1: department find_by_id")?;
    let department = dao.find_by_id(config.lookup_id).await?;
    console.line(&department)?;

    console.heading("Step 2: department find_all")?;
    for department in dao.find_all().await? {
        console.line(department)?;
    }

    console.heading("Step 3: department insert")?;
    let mut department = Department::new(config.insert_name.as_str());
    dao.insert(&mut department).await?;
    let inserted_id = department
        .id
        .ok_or_else(|| DepotError::internal("insert did not assign an id"))?;
    info!(id = %inserted_id, "Department inserted");
    console.line(format!("Inserted! New id: {}", inserted_id))?;

    console.heading("Step 4: department update")?;
    let mut department = dao.find_by_id(config.lookup_id).await?;
    department.rename(config.update_name.as_str());
    dao.update(&department).await?;
    info!(id = %config.lookup_id, "Department updated");
    console.line("Update completed")?;

    console.heading("Step 5: department delete")?;
    let deleted_id = console.prompt_id("Enter id for delete test:")?;
    dao.delete_by_id(deleted_id).await?;
    info!(id = %deleted_id, "Department deleted");
    console.line("Delete completed")?;

    Ok(WalkthroughReport {
        inserted_id,
        updated_id: config.lookup_id,
        deleted_id,
    })
}
