use std::collections::HashMap;

/// A row returned by the executor, column name -> text value.
pub type QueryRow = HashMap<String, Option<String>>;

/// Statement text plus positional parameters, bound in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub binds: Vec<String>,
}

impl SqlStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            binds: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<String>) -> Self {
        self.binds.push(value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    pub rows_affected: u64,
}
