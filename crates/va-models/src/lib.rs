//! # va-models
//!
//! Stochastic-volatility market model parameters for volarb-rs.
//!
//! The validated constructors in this crate are the single gate through
//! which parameter sets must pass before being used anywhere else in the
//! system: once a `StochasticVolParams` or `MarketModel` exists, its
//! invariants hold for its whole lifetime.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Single-factor stochastic-volatility process parameters.
pub mod stochastic_vol;

/// Joint two-process market model.
pub mod market_model;

pub use market_model::MarketModel;
pub use stochastic_vol::StochasticVolParams;
