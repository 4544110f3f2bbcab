use strum::{Display, EnumString, IntoStaticStr};

/// Access methods accepted in the `USING` clause.
pub const AVAILABLE_USING_METHODS: &[&str] = &["btree", "hash", "gin", "gist"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum IndexMethod {
    #[strum(serialize = "btree")]
    Btree,
    #[strum(serialize = "hash")]
    Hash,
    #[strum(serialize = "gin")]
    Gin,
    #[strum(serialize = "gist")]
    Gist,
}

impl IndexMethod {
    pub fn is_available(using: &str) -> bool {
        AVAILABLE_USING_METHODS.contains(&using)
    }
}

impl From<IndexMethod> for String {
    fn from(method: IndexMethod) -> Self {
        method.to_string()
    }
}
