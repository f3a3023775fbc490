//! Application wiring.

use crate::di::build_module;
use crate::startup::log_startup_info;
use crate::{run_walkthrough, Console, WalkthroughReport};
use depot_config::{AppConfig, Backend};
use depot_core::DepotResult;
use depot_repository::{create_pool, DatabasePoolInterface, InMemoryDepartmentDao};
use tracing::info;

/// Runs the walkthrough on stdin/stdout against the configured backend.
///
/// For MySQL the pool is opened here and closed again before returning,
/// whether or not the walkthrough succeeded.
pub async fn run(config: AppConfig) -> DepotResult<WalkthroughReport> {
    log_startup_info(&config);
    let mut console = Console::stdio();

    let report = match config.database.backend {
        Backend::Memory => {
            let dao = InMemoryDepartmentDao::seeded();
            run_walkthrough(&dao, &config.walkthrough, &mut console).await?
        }
        Backend::Mysql => {
            let pool = create_pool(&config.database).await?;
            let module = build_module(&pool);
            let dao = module.department_dao();

            let result = run_walkthrough(dao.as_ref(), &config.walkthrough, &mut console).await;
            pool.close().await;
            result?
        }
    };

    info!(
        inserted = %report.inserted_id,
        updated = %report.updated_id,
        deleted = %report.deleted_id,
        "Walkthrough complete"
    );
    Ok(report)
}
