use std::{str::FromStr, time::Duration};

use cindex_common::log_info;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    ConnectOptions, Pool, Postgres,
};
use url::Url;

const MASKED: &str = "***";

pub struct ConnectorUtil {}

impl ConnectorUtil {
    pub async fn create_pg_conn_pool(
        url: &str,
        max_connections: u32,
        enable_sqlx_log: bool,
    ) -> anyhow::Result<Pool<Postgres>> {
        log_info!("pg url: {}", Self::mask_url(url));
        let mut conn_options = PgConnectOptions::from_str(url)?;
        conn_options
            .log_statements(log::LevelFilter::Info)
            .log_slow_statements(log::LevelFilter::Info, Duration::from_secs(1));

        if !enable_sqlx_log {
            conn_options.disable_statement_logging();
        }

        let conn_pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(conn_options)
            .await?;
        Ok(conn_pool)
    }

    /// Hides the password of a connection url before it is logged.
    pub fn mask_url(url: &str) -> String {
        match Url::parse(url) {
            Ok(mut url_info) => {
                if url_info.password().is_some() && url_info.set_password(Some(MASKED)).is_err() {
                    return MASKED.to_string();
                }
                url_info.to_string()
            }
            Err(_) => MASKED.to_string(),
        }
    }
}
