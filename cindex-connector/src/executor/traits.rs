use async_trait::async_trait;
use cindex_common::meta::sql_statement::{ExecuteResult, QueryRow, SqlStatement};

/// Runs statements against a live connection. Errors are returned as raised
/// by the driver.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Dialect identifier of the underlying connection, e.g. `postgresql`.
    fn platform(&self) -> &str;

    async fn execute(&self, statement: &SqlStatement) -> anyhow::Result<ExecuteResult>;

    async fn fetch_one(&self, statement: &SqlStatement) -> anyhow::Result<Option<QueryRow>>;

    async fn fetch_all(&self, statement: &SqlStatement) -> anyhow::Result<Vec<QueryRow>>;
}
