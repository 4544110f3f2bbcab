use md5::{Digest, Md5};

/// Marks every index managed by this crate.
pub const INDEX_NAME_PREFIX: &str = "i_cindex_";

const UNIQUE: &str = "unique";

pub struct IndexNameGenerator {}

impl IndexNameGenerator {
    /// Derives a content-addressed name: prefix, optional `unique_`, then the
    /// md5 hex digest of table, columns (in order), method and `_` + predicate.
    pub fn generate(
        table_name: &str,
        columns: &[String],
        using: Option<&str>,
        where_clause: Option<&str>,
        unique: bool,
    ) -> String {
        let mut hasher = Md5::new();
        hasher.update(table_name.as_bytes());
        for column in columns {
            hasher.update(column.as_bytes());
        }
        hasher.update(using.unwrap_or_default().as_bytes());
        if let Some(where_clause) = where_clause {
            hasher.update(b"_");
            hasher.update(where_clause.as_bytes());
        }
        let digest = hasher.finalize();

        let unique_part = if unique {
            format!("{}_", UNIQUE)
        } else {
            String::new()
        };
        format!("{}{}{:x}", INDEX_NAME_PREFIX, unique_part, digest)
    }

    /// Prepends the prefix unless the name already carries it.
    pub fn normalize(name: &str) -> String {
        if Self::is_managed(name) {
            name.to_string()
        } else {
            format!("{}{}", INDEX_NAME_PREFIX, name)
        }
    }

    pub fn is_managed(name: &str) -> bool {
        name.starts_with(INDEX_NAME_PREFIX)
    }

    /// LIKE pattern matching every managed index name. `_` is escaped so it
    /// matches literally instead of any single character.
    pub fn like_pattern() -> String {
        format!("{}%", INDEX_NAME_PREFIX.replace('_', "\\_"))
    }
}
