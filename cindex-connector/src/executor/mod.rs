pub mod pg_executor;
pub mod traits;
