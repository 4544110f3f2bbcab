use std::str::FromStr;

use anyhow::bail;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum DbType {
    #[strum(serialize = "mysql")]
    Mysql,
    #[strum(serialize = "postgresql")]
    Pg,
}

impl DbType {
    /// Resolves a dialect identifier reported by the driver.
    pub fn from_platform(platform: &str) -> anyhow::Result<Self> {
        match Self::from_str(platform) {
            Ok(db_type) => Ok(db_type),
            Err(_) => bail! {Error::UnsupportedPlatform(platform.to_string())},
        }
    }
}
