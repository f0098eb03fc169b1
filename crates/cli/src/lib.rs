//! Neo Invoke CLI Library
//!
//! Argument definitions and command implementations behind the `neo-invoke`
//! binary.

pub mod args;
pub mod commands;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
