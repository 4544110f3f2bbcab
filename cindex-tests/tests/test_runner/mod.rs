pub mod recording_executor;
pub mod test_base;
