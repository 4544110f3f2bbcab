use thiserror::Error;

use crate::meta::index::index_validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("platform {0} is not supported")]
    UnsupportedPlatform(String),

    #[error("validation failure: {0}")]
    ValidationFailure(ValidationErrors),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}
