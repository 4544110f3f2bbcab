use cindex_common::{
    log_info,
    meta::{
        index::index_sql_builder::{IndexSqlBuilder, CURRENT_SCHEMA},
        sql_statement::SqlStatement,
    },
};
use tokio::sync::OnceCell;

use crate::executor::traits::SqlExecutor;

/// Memoizes the connection's default schema. The lookup runs at most once
/// per resolver; a failed lookup is not cached.
#[derive(Debug, Default)]
pub struct CurrentSchemaResolver {
    current_schema: OnceCell<Option<String>>,
}

impl CurrentSchemaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver that already knows the current schema.
    pub fn with_schema(schema: Option<String>) -> Self {
        Self {
            current_schema: OnceCell::new_with(Some(schema)),
        }
    }

    /// The memoized value, `None` if no lookup has completed yet.
    pub fn cached(&self) -> Option<Option<&str>> {
        self.current_schema.get().map(|schema| schema.as_deref())
    }

    pub async fn resolve(&self, executor: &dyn SqlExecutor) -> anyhow::Result<Option<String>> {
        let schema = self
            .current_schema
            .get_or_try_init(|| Self::fetch(executor))
            .await?;
        Ok(schema.clone())
    }

    async fn fetch(executor: &dyn SqlExecutor) -> anyhow::Result<Option<String>> {
        let sql = IndexSqlBuilder::from_platform(executor.platform())?.current_schema_sql()?;
        log_info!("query current schema: {}", sql);

        let row = executor.fetch_one(&SqlStatement::new(sql)).await?;
        let schema = row.and_then(|mut row| row.remove(CURRENT_SCHEMA)).flatten();
        log_info!("current schema: {:?}", schema);
        Ok(schema)
    }
}
