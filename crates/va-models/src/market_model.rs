//! Joint two-process market model.
//!
//! A volatility-arbitrage strategy trades the spread between implied and
//! realized volatility, so its pricing needs the joint dynamics of two
//! variance processes:
//!
//! ```text
//! dv_imp  = κ_i(θ_i − v_imp)  dt + ξ_i √v_imp  dW_i
//! dv_real = κ_r(θ_r − v_real) dt + ξ_r √v_real dW_r
//! ```
//!
//! together with the correlation of spot against implied variance and of
//! realized variance against implied variance.

use crate::stochastic_vol::StochasticVolParams;
use va_core::{ensure, Correlation, Result};

/// The two-factor market model: implied- and realized-variance processes
/// plus their cross-correlations.
///
/// Both cross-correlations are validated to [-1, 1] **inclusive**, unlike
/// the strict (-1, 1) bound on each process's internal ρ: a boundary
/// correlation between two *different* processes (realized variance moving
/// in lockstep with implied) is a meaningful limit case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketModel {
    implied_vol_process: StochasticVolParams,
    realized_vol_process: StochasticVolParams,
    spot_implied_var_corr: Correlation,
    realized_implied_var_corr: Correlation,
}

impl MarketModel {
    /// Create a validated market model from two process parameter sets and
    /// the two cross-correlations.
    pub fn new(
        implied_vol_process: StochasticVolParams,
        realized_vol_process: StochasticVolParams,
        spot_implied_var_corr: Correlation,
        realized_implied_var_corr: Correlation,
    ) -> Result<Self> {
        ensure!(
            spot_implied_var_corr.abs() <= 1.0,
            "spot/implied-variance correlation must be in [-1, 1], got {spot_implied_var_corr}"
        );
        ensure!(
            realized_implied_var_corr.abs() <= 1.0,
            "realized/implied-variance correlation must be in [-1, 1], got {realized_implied_var_corr}"
        );

        Ok(Self {
            implied_vol_process,
            realized_vol_process,
            spot_implied_var_corr,
            realized_implied_var_corr,
        })
    }

    /// Parameters of the implied-variance process.
    pub fn implied_vol_process(&self) -> &StochasticVolParams {
        &self.implied_vol_process
    }

    /// Parameters of the realized-variance process.
    pub fn realized_vol_process(&self) -> &StochasticVolParams {
        &self.realized_vol_process
    }

    /// Correlation between spot and implied variance.
    pub fn spot_implied_var_corr(&self) -> Correlation {
        self.spot_implied_var_corr
    }

    /// Correlation between realized and implied variance.
    pub fn realized_implied_var_corr(&self) -> Correlation {
        self.realized_implied_var_corr
    }
}
