use cindex_common::{config::task_config::TaskConfig, log_info, logger::Logger};

use crate::index_manager::IndexManager;

pub mod connector_util;
pub mod executor;
pub mod index_manager;
pub mod schema_resolver;

/// Loads the ini task file, optionally installs log4rs, and connects an
/// [`IndexManager`] to the configured database.
pub async fn build_index_manager(
    task_config_file: &str,
    enable_log4rs: bool,
) -> anyhow::Result<IndexManager> {
    let task_config = TaskConfig::new(task_config_file)?;
    if enable_log4rs {
        Logger::init_log4rs(&task_config.runtime)?;
    }
    log_info!("loaded index task config: {}", task_config_file);
    IndexManager::from_config(&task_config).await
}
