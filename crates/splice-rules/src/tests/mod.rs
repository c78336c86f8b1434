//! Unit tests for splice-rules.
