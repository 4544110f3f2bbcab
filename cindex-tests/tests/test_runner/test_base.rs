use std::{env, fs, sync::Arc};

use cindex_common::config::task_config::TaskConfig;
use cindex_connector::index_manager::IndexManager;

use super::recording_executor::RecordingExecutor;

pub const PG_URL_ENV: &str = "CINDEX_TEST_PG_URL";

pub struct TestBase {}

#[allow(dead_code)]
impl TestBase {
    pub fn recording_manager(current_schema: &str) -> (IndexManager, Arc<RecordingExecutor>) {
        let executor = RecordingExecutor::new("postgresql", current_schema);
        (IndexManager::new(executor.clone()), executor)
    }

    /// Writes a task config into the temp dir and returns its path.
    pub fn write_task_config(file_name: &str, content: &str) -> String {
        let mut path = env::temp_dir();
        path.push(file_name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    pub fn pg_task_config(url: &str) -> TaskConfig {
        TaskConfig::from_content(&format!(
            "[connection]\ndb_type=postgresql\nurl={}\nmax_connections=1\n\n[index]\nsearch_in_all_schemas=false\n",
            url
        ))
        .unwrap()
    }

    pub fn pg_url() -> String {
        env::var(PG_URL_ENV).unwrap_or_else(|_| {
            panic!("{} must be set to run live postgres tests", PG_URL_ENV)
        })
    }
}
