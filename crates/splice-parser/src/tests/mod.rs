//! Unit tests for splice-parser.

mod options_tests;
