//! CLI command implementations
//!
//! This module contains all command implementations for the hookpin CLI.

pub mod fmt;
pub mod list;
pub mod sample;
pub mod show;
pub mod validate;
