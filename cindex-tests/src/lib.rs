//! Integration tests for the index engine live under `tests/`.
