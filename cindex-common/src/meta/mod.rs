pub mod db_enums;
pub mod index;
pub mod sql_statement;
