use super::{
    connection_config::ConnectionConfig, index_config::IndexConfig, ini_loader::IniLoader,
    runtime_config::RuntimeConfig,
};

#[derive(Clone, Debug)]
pub struct TaskConfig {
    pub connection: ConnectionConfig,
    pub index: IndexConfig,
    pub runtime: RuntimeConfig,
}

const CONNECTION: &str = "connection";
const INDEX: &str = "index";
const RUNTIME: &str = "runtime";

impl TaskConfig {
    pub fn new(task_config_file: &str) -> anyhow::Result<Self> {
        Self::load(&IniLoader::from_file(task_config_file)?)
    }

    pub fn from_content(config_str: &str) -> anyhow::Result<Self> {
        Self::load(&IniLoader::from_content(config_str.to_string())?)
    }

    fn load(loader: &IniLoader) -> anyhow::Result<Self> {
        Ok(Self {
            connection: Self::load_connection_config(loader)?,
            index: Self::load_index_config(loader)?,
            runtime: Self::load_runtime_config(loader)?,
        })
    }

    fn load_connection_config(loader: &IniLoader) -> anyhow::Result<ConnectionConfig> {
        Ok(ConnectionConfig {
            db_type: loader.get_required(CONNECTION, "db_type")?,
            url: loader.get_required(CONNECTION, "url")?,
            max_connections: loader.get_with_default(CONNECTION, "max_connections", 1)?,
            enable_sqlx_log: loader.get_optional(CONNECTION, "enable_sqlx_log")?,
        })
    }

    fn load_index_config(loader: &IniLoader) -> anyhow::Result<IndexConfig> {
        Ok(IndexConfig {
            search_in_all_schemas: loader.get_optional(INDEX, "search_in_all_schemas")?,
        })
    }

    fn load_runtime_config(loader: &IniLoader) -> anyhow::Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            log_level: loader.get_with_default(RUNTIME, "log_level", "info".to_string())?,
            log_dir: loader.get_with_default(RUNTIME, "log_dir", "./logs".to_string())?,
            log4rs_file: loader.get_with_default(
                RUNTIME,
                "log4rs_file",
                "./log4rs.yaml".to_string(),
            )?,
        })
    }
}
