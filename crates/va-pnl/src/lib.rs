//! # va-pnl
//!
//! Risk-factor PnL attribution for volatility-arbitrage strategies.
//!
//! A pricing/greeks engine computes six time-aligned *per-unit-of-position*
//! PnL streams under a configured market model; `PnlCalculator` bundles
//! them and projects a realized position path onto them, yielding a
//! `PnlBreakdown` of the PnL actually earned from each risk factor.
//! Breakdowns combine with `+` and `-` across strategies, hedge legs, and
//! sub-periods while preserving the per-component structure.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Realized PnL split by risk factor, with component-wise algebra.
pub mod breakdown;

/// Per-unit PnL basis and the position projection.
pub mod calculator;

pub use breakdown::PnlBreakdown;
pub use calculator::PnlCalculator;
