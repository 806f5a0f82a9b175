//! Realized PnL split by risk factor.
//!
//! The six components are fixed: adding a new risk factor means extending
//! the struct *and* every operator impl below.  Combination is written out
//! field by field, so an operand that is not itself a `PnlBreakdown` is
//! rejected at compile time.

use std::ops::{Add, Neg, Sub};
use va_core::Size;
use va_math::Series;

/// Realized PnL of a strategy over a time grid, decomposed by source.
///
/// All six series cover the same time grid; every producer (the
/// calculator's projection, or the operators below) maintains that
/// alignment, so it is not re-checked structurally at construction.
///
/// Combining two breakdowns of different lengths is a caller bug and
/// panics via the underlying element-wise arithmetic.  Combining with
/// anything that is not itself a `PnlBreakdown` does not compile:
///
/// ```compile_fail
/// use va_math::Series;
/// use va_pnl::PnlBreakdown;
///
/// let pnl = PnlBreakdown::zeros(3);
/// let _ = &pnl + &Series::zeros(3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PnlBreakdown {
    /// Total PnL per time step.
    pub total: Series,
    /// PnL from variance-vega exposure.
    pub var_vega: Series,
    /// PnL from time decay.
    pub theta: Series,
    /// PnL from the spot/vol cross sensitivity.
    pub vanna: Series,
    /// PnL from gamma.
    pub gamma: Series,
    /// PnL from the vega hedge leg.
    pub vega_hedge: Series,
}

impl PnlBreakdown {
    /// The additive identity: every component all zeros over `n` steps.
    pub fn zeros(n: Size) -> Self {
        Self {
            total: Series::zeros(n),
            var_vega: Series::zeros(n),
            theta: Series::zeros(n),
            vanna: Series::zeros(n),
            gamma: Series::zeros(n),
            vega_hedge: Series::zeros(n),
        }
    }

    /// Number of time steps covered by each component.
    pub fn size(&self) -> Size {
        self.total.size()
    }
}

// ── Component-wise algebra ────────────────────────────────────────────────────

impl Add for &PnlBreakdown {
    type Output = PnlBreakdown;

    /// # Panics
    /// Panics if the operands cover different time grids.
    fn add(self, rhs: &PnlBreakdown) -> PnlBreakdown {
        PnlBreakdown {
            total: &self.total + &rhs.total,
            var_vega: &self.var_vega + &rhs.var_vega,
            theta: &self.theta + &rhs.theta,
            vanna: &self.vanna + &rhs.vanna,
            gamma: &self.gamma + &rhs.gamma,
            vega_hedge: &self.vega_hedge + &rhs.vega_hedge,
        }
    }
}

impl Add for PnlBreakdown {
    type Output = PnlBreakdown;
    fn add(self, rhs: PnlBreakdown) -> PnlBreakdown {
        &self + &rhs
    }
}

impl Sub for &PnlBreakdown {
    type Output = PnlBreakdown;

    /// # Panics
    /// Panics if the operands cover different time grids.
    fn sub(self, rhs: &PnlBreakdown) -> PnlBreakdown {
        PnlBreakdown {
            total: &self.total - &rhs.total,
            var_vega: &self.var_vega - &rhs.var_vega,
            theta: &self.theta - &rhs.theta,
            vanna: &self.vanna - &rhs.vanna,
            gamma: &self.gamma - &rhs.gamma,
            vega_hedge: &self.vega_hedge - &rhs.vega_hedge,
        }
    }
}

impl Sub for PnlBreakdown {
    type Output = PnlBreakdown;
    fn sub(self, rhs: PnlBreakdown) -> PnlBreakdown {
        &self - &rhs
    }
}

impl Neg for &PnlBreakdown {
    type Output = PnlBreakdown;

    /// The short side: every component negated.
    fn neg(self) -> PnlBreakdown {
        PnlBreakdown {
            total: -&self.total,
            var_vega: -&self.var_vega,
            theta: -&self.theta,
            vanna: -&self.vanna,
            gamma: -&self.gamma,
            vega_hedge: -&self.vega_hedge,
        }
    }
}

impl Neg for PnlBreakdown {
    type Output = PnlBreakdown;
    fn neg(self) -> PnlBreakdown {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Dyadic values keep every identity below exact to the last bit.
    fn breakdown(scale: f64) -> PnlBreakdown {
        PnlBreakdown {
            total: Series::from_slice(&[1.0 * scale, 2.0 * scale, 3.0 * scale]),
            var_vega: Series::from_slice(&[0.125 * scale, 0.25 * scale, 0.375 * scale]),
            theta: Series::from_slice(&[-0.0625 * scale; 3]),
            vanna: Series::zeros(3),
            gamma: Series::from_slice(&[0.5 * scale; 3]),
            vega_hedge: Series::zeros(3),
        }
    }

    #[test]
    fn add_is_component_wise() {
        let sum = &breakdown(1.0) + &breakdown(2.0);
        assert_eq!(sum.total.as_slice(), &[3.0, 6.0, 9.0]);
        assert_eq!(sum.gamma.as_slice(), &[1.5, 1.5, 1.5]);
        assert_eq!(sum.vanna.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn sub_inverts_add() {
        let a = breakdown(1.0);
        let b = breakdown(3.0);
        assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn add_commutes_and_associates() {
        let (a, b, c) = (breakdown(1.0), breakdown(2.0), breakdown(5.0));
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn zeros_is_additive_identity() {
        let a = breakdown(1.0);
        assert_eq!(&a + &PnlBreakdown::zeros(3), a);
    }

    #[test]
    fn neg_is_sub_from_zero() {
        let a = breakdown(1.0);
        assert_eq!(-&a, &PnlBreakdown::zeros(3) - &a);
    }

    #[test]
    #[should_panic]
    fn mismatched_grids_panic() {
        let _ = &breakdown(1.0) + &PnlBreakdown::zeros(4);
    }

    proptest! {
        /// `A + B - B == A` exactly for integral-valued series, where
        /// float addition is exact.
        #[test]
        fn algebra_round_trips(
            v in proptest::collection::vec(-1000_i32..1000, 1..32),
            w in proptest::collection::vec(-1000_i32..1000, 1..32),
        ) {
            let n = v.len().min(w.len());
            let a_vals: Vec<f64> = v[..n].iter().map(|&x| x as f64).collect();
            let b_vals: Vec<f64> = w[..n].iter().map(|&x| x as f64).collect();
            let series_a = Series::from_slice(&a_vals);
            let series_b = Series::from_slice(&b_vals);

            let mut a = PnlBreakdown::zeros(n);
            a.total = series_a.clone();
            a.gamma = series_a;
            let mut b = PnlBreakdown::zeros(n);
            b.total = series_b.clone();
            b.theta = series_b;

            prop_assert_eq!(&(&a + &b) - &b, a.clone());
            prop_assert_eq!(&a + &b, &b + &a);
        }
    }
}
