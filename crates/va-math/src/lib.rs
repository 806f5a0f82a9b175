//! # va-math
//!
//! Sample-path vector type and element-wise arithmetic for volarb-rs,
//! built on a `nalgebra` newtype.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Series` — a time-indexed sample path of real values.
pub mod series;

pub use series::Series;
