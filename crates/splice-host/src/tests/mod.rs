//! Unit tests for splice-host.

mod unit;
