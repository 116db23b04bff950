//! Test helpers module
//!
//! This module provides utilities and helpers for testing locale document
//! retrieval. It includes a mock locale server and test environment setup.

pub mod locale_mock;
pub mod simple_test;

pub use locale_mock::*;
pub use simple_test::*;
