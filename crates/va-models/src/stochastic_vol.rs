//! Single-factor stochastic-volatility process parameters.
//!
//! The variance process follows square-root (CIR-type) dynamics:
//!
//! ```text
//! dv = κ(θ − v) dt + ξ √v dW
//! ```
//!
//! with correlation ρ between `dW` and the driving Brownian motion of the
//! quantity whose variance this is.

use va_core::{ensure, Correlation, Real, Result};

/// Parameters of a square-root stochastic-variance process.
///
/// * `mean_reversion_speed` — κ, pull towards the long-run level
/// * `long_run_variance`    — θ, the level variance reverts to
/// * `vol_of_variance`      — ξ, diffusion coefficient of variance
/// * `correlation`          — ρ, leverage correlation of the process
///
/// Construction validates every bound and the Feller condition, so a value
/// of this type always describes a variance process that stays strictly
/// positive almost surely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticVolParams {
    mean_reversion_speed: Real,
    long_run_variance: Real,
    vol_of_variance: Real,
    correlation: Correlation,
}

impl StochasticVolParams {
    /// Create a validated parameter set.
    ///
    /// Checks, in order: κ > 0, θ > 0, ξ > 0, |ρ| < 1 (strict), and the
    /// Feller condition `2κθ > ξ²`.  The first failing predicate aborts
    /// construction with a parameter error naming the field and bound.
    pub fn new(
        mean_reversion_speed: Real,
        long_run_variance: Real,
        vol_of_variance: Real,
        correlation: Correlation,
    ) -> Result<Self> {
        ensure!(
            mean_reversion_speed > 0.0,
            "mean-reversion speed kappa must be positive, got {mean_reversion_speed}"
        );
        ensure!(
            long_run_variance > 0.0,
            "long-run variance theta must be positive, got {long_run_variance}"
        );
        ensure!(
            vol_of_variance > 0.0,
            "vol-of-variance xi must be positive, got {vol_of_variance}"
        );
        ensure!(
            correlation.abs() < 1.0,
            "process correlation rho must be in (-1, 1), got {correlation}"
        );
        ensure!(
            2.0 * mean_reversion_speed * long_run_variance
                > vol_of_variance * vol_of_variance,
            "Feller condition violated: 2*kappa*theta = {} must exceed xi^2 = {}",
            2.0 * mean_reversion_speed * long_run_variance,
            vol_of_variance * vol_of_variance
        );

        Ok(Self {
            mean_reversion_speed,
            long_run_variance,
            vol_of_variance,
            correlation,
        })
    }

    /// Mean-reversion speed κ.
    pub fn mean_reversion_speed(&self) -> Real {
        self.mean_reversion_speed
    }

    /// Long-run variance θ.
    pub fn long_run_variance(&self) -> Real {
        self.long_run_variance
    }

    /// Vol-of-variance ξ.
    pub fn vol_of_variance(&self) -> Real {
        self.vol_of_variance
    }

    /// Correlation ρ.
    pub fn correlation(&self) -> Correlation {
        self.correlation
    }

    /// Feller ratio `2κθ / ξ²`, strictly greater than 1 by construction.
    ///
    /// Useful as a calibration margin: values close to 1 indicate the
    /// variance process is near the boundary where it could touch zero.
    pub fn feller_ratio(&self) -> Real {
        2.0 * self.mean_reversion_speed * self.long_run_variance
            / (self.vol_of_variance * self.vol_of_variance)
    }
}
