use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use anyhow::bail;
use async_trait::async_trait;
use cindex_common::meta::sql_statement::{ExecuteResult, QueryRow, SqlStatement};
use cindex_connector::executor::traits::SqlExecutor;

/// In-memory stand-in for a Postgres connection: remembers created indexes
/// so that enumeration reflects earlier CREATE / DROP statements.
pub struct RecordingExecutor {
    platform: String,
    current_schema: String,
    indexes: Mutex<HashSet<String>>,
    statements: Mutex<Vec<SqlStatement>>,
}

#[allow(dead_code)]
impl RecordingExecutor {
    pub fn new(platform: &str, current_schema: &str) -> Arc<Self> {
        Arc::new(Self {
            platform: platform.to_string(),
            current_schema: current_schema.to_string(),
            indexes: Mutex::new(HashSet::new()),
            statements: Mutex::new(Vec::new()),
        })
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.sql.clone())
            .collect()
    }

    pub fn count_statements(&self, prefix: &str) -> usize {
        self.statements()
            .iter()
            .filter(|sql| sql.starts_with(prefix))
            .count()
    }

    fn record(&self, statement: &SqlStatement) {
        println!("executed sql: {}", statement.sql);
        self.statements.lock().unwrap().push(statement.clone());
    }

    // `CREATE [UNIQUE] INDEX <name> ON <table> ...` -> `schema.name`
    fn created_index(&self, sql: &str) -> Option<String> {
        let tokens: Vec<&str> = sql.split_whitespace().collect();
        let name_pos = tokens.iter().position(|t| *t == "INDEX")? + 1;
        let name = tokens.get(name_pos)?;
        let table = tokens.get(name_pos + 2)?;
        let schema = match table.split_once('.') {
            Some((schema, _)) => schema,
            None => self.current_schema.as_str(),
        };
        Some(format!("{}.{}", schema, name))
    }

    fn dropped_index(&self, sql: &str) -> Option<String> {
        let name = sql.strip_prefix("DROP INDEX ")?;
        if name.contains('.') {
            Some(name.to_string())
        } else {
            Some(format!("{}.{}", self.current_schema, name))
        }
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    fn platform(&self) -> &str {
        &self.platform
    }

    async fn execute(&self, statement: &SqlStatement) -> anyhow::Result<ExecuteResult> {
        self.record(statement);
        let mut indexes = self.indexes.lock().unwrap();
        if statement.sql.starts_with("CREATE") {
            let index = self.created_index(&statement.sql).unwrap();
            if !indexes.insert(index.clone()) {
                bail!("relation \"{}\" already exists", index)
            }
        } else if let Some(index) = self.dropped_index(&statement.sql) {
            if !indexes.remove(&index) {
                bail!("index \"{}\" does not exist", index)
            }
        }
        Ok(ExecuteResult::default())
    }

    async fn fetch_one(&self, statement: &SqlStatement) -> anyhow::Result<Option<QueryRow>> {
        self.record(statement);
        let mut row = QueryRow::new();
        row.insert(
            "current_schema".to_string(),
            Some(self.current_schema.clone()),
        );
        Ok(Some(row))
    }

    async fn fetch_all(&self, statement: &SqlStatement) -> anyhow::Result<Vec<QueryRow>> {
        self.record(statement);
        let prefix = statement.binds[0].replace('\\', "").replace('%', "");
        let current_schema_only = statement.sql.contains("current_schema()");

        let mut names: Vec<String> = self
            .indexes
            .lock()
            .unwrap()
            .iter()
            .filter(|index| {
                let (schema, name) = index.split_once('.').unwrap();
                name.starts_with(&prefix)
                    && (!current_schema_only || schema == self.current_schema)
            })
            .cloned()
            .collect();
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| {
                let mut row = QueryRow::new();
                row.insert("relname".to_string(), Some(name));
                row
            })
            .collect())
    }
}
