//! Terminal output helpers for hookpin
//!
//! - Status icons
//! - Unified diffs

pub mod diff;
pub mod icons;

pub use icons::{Icons, StatusIcon};

use std::io::IsTerminal;

/// Whether stdout should receive ANSI colors
#[must_use]
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
