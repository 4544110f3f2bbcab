use std::sync::Arc;

use anyhow::bail;
use cindex_common::{
    config::{index_config::IndexConfig, task_config::TaskConfig},
    error::Error,
    log_debug, log_error, log_info, log_warn,
    meta::{
        db_enums::DbType,
        index::{
            index_definition::IndexDefinition,
            index_name::IndexNameGenerator,
            index_sql_builder::{IndexSqlBuilder, RELNAME},
        },
        sql_statement::{ExecuteResult, SqlStatement},
    },
};

use crate::{
    connector_util::ConnectorUtil,
    executor::{pg_executor::PgExecutor, traits::SqlExecutor},
    schema_resolver::CurrentSchemaResolver,
};

/// Renders index statements for the executor's dialect and hands them to the
/// executor. No retries, no transactions.
pub struct IndexManager {
    executor: Arc<dyn SqlExecutor>,
    schema_resolver: CurrentSchemaResolver,
    index_config: IndexConfig,
}

impl IndexManager {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self::with_schema_resolver(executor, CurrentSchemaResolver::new())
    }

    pub fn with_schema_resolver(
        executor: Arc<dyn SqlExecutor>,
        schema_resolver: CurrentSchemaResolver,
    ) -> Self {
        Self {
            executor,
            schema_resolver,
            index_config: IndexConfig::default(),
        }
    }

    pub fn with_index_config(mut self, index_config: IndexConfig) -> Self {
        self.index_config = index_config;
        self
    }

    pub async fn from_config(config: &TaskConfig) -> anyhow::Result<Self> {
        let executor: Arc<dyn SqlExecutor> =
            match DbType::from_platform(&config.connection.db_type)? {
                DbType::Pg => {
                    let pool = ConnectorUtil::create_pg_conn_pool(
                        &config.connection.url,
                        config.connection.max_connections,
                        config.connection.enable_sqlx_log,
                    )
                    .await?;
                    Arc::new(PgExecutor::new(pool))
                }
                db_type => bail! {Error::UnsupportedPlatform(db_type.to_string())},
            };
        Ok(Self::new(executor).with_index_config(config.index.clone()))
    }

    pub fn executor(&self) -> &Arc<dyn SqlExecutor> {
        &self.executor
    }

    fn sql_builder(&self) -> anyhow::Result<IndexSqlBuilder> {
        IndexSqlBuilder::from_platform(self.executor.platform())
    }

    pub async fn fetch_current_schema(&self) -> anyhow::Result<Option<String>> {
        self.schema_resolver.resolve(self.executor.as_ref()).await
    }

    /// The CREATE statement for a valid `definition`. The current schema is
    /// looked up only when the definition names a schema.
    pub async fn create_index_sql(&self, definition: &IndexDefinition) -> anyhow::Result<String> {
        definition.ensure_valid()?;
        let sql_builder = self.sql_builder()?;
        let current_schema = match definition.schema() {
            Some(_) => self.fetch_current_schema().await?,
            None => None,
        };
        sql_builder.create_index_sql(definition, current_schema.as_deref())
    }

    pub async fn create_index(&self, definition: &IndexDefinition) -> anyhow::Result<ExecuteResult> {
        let sql = self.create_index_sql(definition).await?;
        log_info!("create index: {}", sql);
        self.execute(SqlStatement::new(sql)).await
    }

    /// Drops an index by the name stored in the catalog, e.g. `schema.index`.
    pub async fn drop_index(&self, index_name: &str) -> anyhow::Result<ExecuteResult> {
        let sql = self.sql_builder()?.drop_index_sql(index_name)?;
        log_info!("drop index: {}", sql);
        self.execute(SqlStatement::new(sql)).await
    }

    // executor errors are logged and returned as is
    async fn execute(&self, statement: SqlStatement) -> anyhow::Result<ExecuteResult> {
        let result = self.executor.execute(&statement).await;
        if let Err(e) = &result {
            log_error!("sql: {}, execute failed: {}", statement.sql, e);
        }
        result
    }

    /// Names (`schema.index`) of every managed index in the database.
    pub async fn fetch_current_indexes(
        &self,
        search_in_all_schemas: bool,
    ) -> anyhow::Result<Vec<String>> {
        let sql = self.sql_builder()?.current_indexes_sql(search_in_all_schemas)?;
        let statement = SqlStatement::new(sql).bind(IndexNameGenerator::like_pattern());
        log_info!("query current indexes: {}, binds: {:?}", statement.sql, statement.binds);

        let mut index_names = Vec::new();
        for mut row in self.executor.fetch_all(&statement).await? {
            match row.remove(RELNAME).flatten() {
                Some(index_name) => index_names.push(index_name),
                None => log_warn!("skip row without {}: {:?}", RELNAME, row),
            }
        }
        log_debug!("found {} managed indexes", index_names.len());
        Ok(index_names)
    }

    /// Like [`Self::fetch_current_indexes`], scoped by the `[index]` config.
    pub async fn fetch_managed_indexes(&self) -> anyhow::Result<Vec<String>> {
        self.fetch_current_indexes(self.index_config.search_in_all_schemas)
            .await
    }
}
