use async_trait::async_trait;
use cindex_common::meta::{
    db_enums::DbType,
    sql_statement::{ExecuteResult, QueryRow, SqlStatement},
};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::Query,
    Column, Pool, Postgres, Row,
};

use super::traits::SqlExecutor;

pub struct PgExecutor {
    pool: Pool<Postgres>,
}

impl PgExecutor {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn build_query(statement: &SqlStatement) -> Query<'_, Postgres, PgArguments> {
        let mut query = sqlx::query(&statement.sql);
        for bind in statement.binds.iter() {
            query = query.bind(bind.as_str());
        }
        query
    }

    // every column is decoded as nullable text
    fn to_query_row(row: &PgRow) -> anyhow::Result<QueryRow> {
        let mut query_row = QueryRow::new();
        for column in row.columns() {
            let value: Option<String> = row.try_get(column.ordinal())?;
            query_row.insert(column.name().to_string(), value);
        }
        Ok(query_row)
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    fn platform(&self) -> &str {
        let platform: &'static str = DbType::Pg.into();
        platform
    }

    async fn execute(&self, statement: &SqlStatement) -> anyhow::Result<ExecuteResult> {
        let result = Self::build_query(statement).execute(&self.pool).await?;
        Ok(ExecuteResult {
            rows_affected: result.rows_affected(),
        })
    }

    async fn fetch_one(&self, statement: &SqlStatement) -> anyhow::Result<Option<QueryRow>> {
        match Self::build_query(statement)
            .fetch_optional(&self.pool)
            .await?
        {
            Some(row) => Ok(Some(Self::to_query_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn fetch_all(&self, statement: &SqlStatement) -> anyhow::Result<Vec<QueryRow>> {
        let rows = Self::build_query(statement).fetch_all(&self.pool).await?;
        rows.iter().map(Self::to_query_row).collect()
    }
}
