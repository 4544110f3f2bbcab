#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    /// Dialect identifier as reported by the driver, e.g. `postgresql`.
    pub db_type: String,
    pub url: String,
    pub max_connections: u32,
    pub enable_sqlx_log: bool,
}
