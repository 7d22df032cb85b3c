//! Common utilities for cssscope.
//!
//! This crate provides shared infrastructure used by the front ends:
//! - **Warning System** - colored terminal output for stylesheet diagnostics

pub mod warning;
