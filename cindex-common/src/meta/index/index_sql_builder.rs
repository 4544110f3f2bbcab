use anyhow::bail;

use crate::{error::Error, meta::db_enums::DbType};

use super::index_definition::IndexDefinition;

/// Column holding the index name in the enumeration query result.
pub const RELNAME: &str = "relname";
/// Column holding the schema name in the current schema query result.
pub const CURRENT_SCHEMA: &str = "current_schema";

/// Renders index DDL and catalog queries for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct IndexSqlBuilder {
    db_type: DbType,
}

impl IndexSqlBuilder {
    pub fn new(db_type: DbType) -> Self {
        Self { db_type }
    }

    pub fn from_platform(platform: &str) -> anyhow::Result<Self> {
        Ok(Self::new(DbType::from_platform(platform)?))
    }

    /// `CREATE [UNIQUE] INDEX name ON table [USING method] (cols) [WHERE predicate]`
    pub fn create_index_sql(
        &self,
        definition: &IndexDefinition,
        current_schema: Option<&str>,
    ) -> anyhow::Result<String> {
        match self.db_type {
            DbType::Pg => {
                let mut sql = String::from("CREATE ");
                if definition.unique() {
                    sql.push_str("UNIQUE ");
                }
                sql.push_str(&format!(
                    "INDEX {} ON {} ",
                    definition.name(),
                    definition.qualified_table_name(current_schema)
                ));
                if let Some(using) = definition.using() {
                    sql.push_str(&format!("USING {} ", using));
                }
                sql.push_str(&format!("({})", definition.columns().join(", ")));
                if let Some(where_clause) = definition.where_clause() {
                    sql.push_str(&format!(" WHERE {}", where_clause));
                }
                Ok(sql)
            }
            _ => self.unsupported(),
        }
    }

    pub fn drop_index_sql(&self, index_name: &str) -> anyhow::Result<String> {
        match self.db_type {
            DbType::Pg => Ok(format!("DROP INDEX {}", index_name)),
            _ => self.unsupported(),
        }
    }

    pub fn current_schema_sql(&self) -> anyhow::Result<String> {
        match self.db_type {
            DbType::Pg => Ok(format!("SELECT current_schema() AS {}", CURRENT_SCHEMA)),
            _ => self.unsupported(),
        }
    }

    /// Lists managed indexes as `schema.index` in a `relname` column. The
    /// name pattern is bound as the first parameter.
    pub fn current_indexes_sql(&self, search_in_all_schemas: bool) -> anyhow::Result<String> {
        match self.db_type {
            DbType::Pg => {
                let mut sql = format!(
                    "SELECT schemaname || '.' || indexname AS {} FROM pg_indexes WHERE indexname LIKE $1",
                    RELNAME
                );
                if !search_in_all_schemas {
                    sql.push_str(" AND schemaname = current_schema()");
                }
                Ok(sql)
            }
            _ => self.unsupported(),
        }
    }

    fn unsupported<T>(&self) -> anyhow::Result<T> {
        bail! {Error::UnsupportedPlatform(self.db_type.to_string())}
    }
}
