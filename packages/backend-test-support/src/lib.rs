//! Backend test support utilities
//!
//! This crate provides utilities for backend testing, currently unified
//! logging initialization for integration test binaries.

pub mod test_logging;
