#[derive(Clone, Debug, Default)]
pub struct IndexConfig {
    /// When false, index enumeration is restricted to the current schema.
    pub search_in_all_schemas: bool,
}
