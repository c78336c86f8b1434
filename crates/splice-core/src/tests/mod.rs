//! Unit tests for `splice_core` types.

mod scope_tests;
