pub mod connection_config;
pub mod index_config;
pub mod ini_loader;
pub mod runtime_config;
pub mod task_config;
