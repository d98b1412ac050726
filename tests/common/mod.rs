//! Common test utilities for Sous CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus a PATH of fake tools
//! - Fixtures: config files and tool shims

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
