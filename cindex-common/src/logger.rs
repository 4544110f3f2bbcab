use std::{
    fs::{self, File},
    io::Read,
};

use log4rs::config::RawConfig;

use crate::{config::runtime_config::RuntimeConfig, error::Error};

const LOG_LEVEL_PLACEHODLER: &str = "LOG_LEVEL_PLACEHODLER";
const LOG_DIR_PLACEHODLER: &str = "LOG_DIR_PLACEHODLER";

#[macro_export(local_inner_macros)]
macro_rules! log_error {
    ($($arg:tt)+) => (log::log!(target: "default_logger", log::Level::Error, $($arg)+))
}

#[macro_export(local_inner_macros)]
macro_rules! log_info {
    ($($arg:tt)+) => (log::log!(target: "default_logger", log::Level::Info, $($arg)+));
}

#[macro_export(local_inner_macros)]
macro_rules! log_warn {
    ($($arg:tt)+) => (log::log!(target: "default_logger", log::Level::Warn, $($arg)+))
}

#[macro_export(local_inner_macros)]
macro_rules! log_debug {
    ($($arg:tt)+) => (log::log!(target: "default_logger", log::Level::Debug, $($arg)+))
}

pub struct Logger {}

impl Logger {
    /// Installs the log4rs config referenced by the runtime section.
    /// Does nothing if the file does not exist.
    pub fn init_log4rs(runtime: &RuntimeConfig) -> anyhow::Result<()> {
        let log4rs_file = &runtime.log4rs_file;
        if fs::metadata(log4rs_file).is_err() {
            return Ok(());
        }

        let mut config_str = String::new();
        File::open(log4rs_file)
            .and_then(|mut f| f.read_to_string(&mut config_str))
            .map_err(Error::IoError)?;
        let config_str = Self::fill_placeholders(&config_str, runtime);

        let config: RawConfig = serde_yaml::from_str(&config_str).map_err(Error::YamlError)?;
        log4rs::init_raw_config(config)?;
        Ok(())
    }

    fn fill_placeholders(config_str: &str, runtime: &RuntimeConfig) -> String {
        config_str
            .replace(LOG_DIR_PLACEHODLER, &runtime.log_dir)
            .replace(LOG_LEVEL_PLACEHODLER, &runtime.log_level)
    }
}
