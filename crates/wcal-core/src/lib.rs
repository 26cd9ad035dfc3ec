//! # wcal-core
//!
//! Error types, CSV field formatting, and date-string parsing helpers
//! shared across the weekcal workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// CSV field quoting and joining.
pub mod csv;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Date-string parsing helpers.
pub mod parse;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year as used throughout the workspace (1900–2199).
pub type Year = u16;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
