use anyhow::bail;

use crate::error::Error;

use super::{index_name::IndexNameGenerator, index_validator::IndexValidator};

/// A custom index: table, ordered columns, access method, predicate and a
/// name that is either explicit or derived from the rest of the definition.
///
/// Built once through [`IndexDefinitionBuilder`]; to change a field, go back
/// through [`IndexDefinition::to_builder`] so the name is resolved again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    table_name: String,
    schema: Option<String>,
    columns: Vec<String>,
    unique: bool,
    using: Option<String>,
    where_clause: Option<String>,
    name: String,
    explicit_name: bool,
}

impl IndexDefinition {
    pub fn builder<I, S>(table_name: impl Into<String>, columns: I) -> IndexDefinitionBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IndexDefinitionBuilder::new(table_name).columns(columns)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn unique(&self) -> bool {
        self.unique
    }

    pub fn using(&self) -> Option<&str> {
        self.using.as_deref()
    }

    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_explicit_name(&self) -> bool {
        self.explicit_name
    }

    /// `schema.table` when the definition targets a schema other than the
    /// connection's current one, plain `table` otherwise.
    pub fn qualified_table_name(&self, current_schema: Option<&str>) -> String {
        match self.schema() {
            Some(schema) if Some(schema) != current_schema => {
                format!("{}.{}", schema, self.table_name)
            }
            _ => self.table_name.clone(),
        }
    }

    pub fn ensure_valid(&self) -> anyhow::Result<()> {
        let errors = IndexValidator::validate(self);
        if !errors.is_empty() {
            bail! {Error::ValidationFailure(errors)}
        }
        Ok(())
    }

    pub fn to_builder(&self) -> IndexDefinitionBuilder {
        IndexDefinitionBuilder {
            table_name: self.table_name.clone(),
            schema: self.schema.clone(),
            columns: self.columns.clone(),
            unique: self.unique,
            using: self.using.clone(),
            where_clause: self.where_clause.clone(),
            name: if self.explicit_name {
                Some(self.name.clone())
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexDefinitionBuilder {
    table_name: String,
    schema: Option<String>,
    columns: Vec<String>,
    unique: bool,
    using: Option<String>,
    where_clause: Option<String>,
    name: Option<String>,
}

impl IndexDefinitionBuilder {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
        }
    }

    /// Replaces the column list.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn using(mut self, using: impl Into<String>) -> Self {
        self.using = Some(using.into());
        self
    }

    pub fn where_clause(mut self, where_clause: impl Into<String>) -> Self {
        self.where_clause = Some(where_clause.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Finalizes the definition. Blank columns are dropped, empty optional
    /// fields count as unset, and the name is resolved here exactly once.
    pub fn build(self) -> IndexDefinition {
        let columns: Vec<String> = self
            .columns
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();
        let schema = non_empty(self.schema);
        let using = non_empty(self.using);
        let where_clause = non_empty(self.where_clause);

        let (name, explicit_name) = match non_empty(self.name) {
            Some(name) => (IndexNameGenerator::normalize(&name), true),
            None => (
                IndexNameGenerator::generate(
                    &self.table_name,
                    &columns,
                    using.as_deref(),
                    where_clause.as_deref(),
                    self.unique,
                ),
                false,
            ),
        };

        IndexDefinition {
            table_name: self.table_name,
            schema,
            columns,
            unique: self.unique,
            using,
            where_clause,
            name,
            explicit_name,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
