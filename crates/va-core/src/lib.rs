//! # va-core
//!
//! Core types, aliases, and error definitions for volarb-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – primitive type aliases and the error
//! hierarchy, together with the `ensure!` / `fail!` macros used by the
//! validated constructors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// An instantaneous variance level (volatility squared).
pub type Variance = Real;

/// A correlation coefficient in [-1, 1].
pub type Correlation = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
