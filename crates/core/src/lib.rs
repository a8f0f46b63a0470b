//! Core types and utilities for hookpin
//!
//! This is the foundation crate (Layer 0) that the other hookpin crates depend on.
//! It provides:
//! - Base error types
//! - Entry locators that name a hook group or hook inside a manifest
//!
//! This crate has no dependencies on other hookpin crates.

pub mod entry;
pub mod error;

pub use entry::Entry;
pub use error::{Error, Result};
