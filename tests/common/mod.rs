//! Common test utilities for idlc CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_no_temp_files!`, `assert_output_contains!`
//! - Fixtures: IDL sources and fake preprocessor scripts

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
