pub mod index_definition;
pub mod index_method;
pub mod index_name;
pub mod index_sql_builder;
pub mod index_validator;
