//! # volarb
//!
//! Volatility-arbitrage PnL attribution under a two-factor
//! stochastic-volatility market model.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `va-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! volarb = "0.1"
//! ```
//!
//! ```rust
//! use volarb::math::Series;
//! use volarb::models::{MarketModel, StochasticVolParams};
//! use volarb::pnl::PnlCalculator;
//!
//! // Validated parameters gate everything downstream.
//! let implied = StochasticVolParams::new(2.0, 0.04, 0.3, -0.5)?;
//! let realized = StochasticVolParams::new(4.0, 0.05, 0.5, -0.6)?;
//! let model = MarketModel::new(implied, realized, -0.7, 0.8)?;
//! assert!(model.implied_vol_process().feller_ratio() > 1.0);
//!
//! // Six per-unit component streams from the pricing engine (stub data
//! // here), projected onto the position actually held.
//! let calc = PnlCalculator::new(
//!     Series::from_slice(&[1.0, 2.0, 3.0]),
//!     Series::from_slice(&[0.1, 0.2, 0.3]),
//!     Series::from_element(3, -0.05),
//!     Series::zeros(3),
//!     Series::from_element(3, 0.5),
//!     Series::zeros(3),
//! );
//! let pnl = calc.project(&Series::from_element(3, 10.0));
//! assert_eq!(pnl.total.as_slice(), &[10.0, 20.0, 30.0]);
//! # Ok::<(), volarb::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use va_core as core;

/// Sample-path vector type and element-wise arithmetic.
pub use va_math as math;

/// Stochastic-volatility market model parameters.
pub use va_models as models;

/// PnL attribution: per-unit basis, projection, breakdown algebra.
pub use va_pnl as pnl;
