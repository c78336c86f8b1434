//! Unit tests for splice-template.

mod unit;
