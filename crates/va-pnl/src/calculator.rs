//! Per-unit PnL basis and the position projection.

use crate::breakdown::PnlBreakdown;
use va_core::Size;
use va_math::Series;

/// The per-unit PnL basis of a strategy.
///
/// Each component series holds the PnL that one unit of position held at
/// that time step would have generated from the corresponding risk factor,
/// as computed by the pricing/greeks engine under the configured market
/// model.  The bundle is immutable; the only operation is [`project`].
///
/// The producer guarantees all six series cover the same time grid, so no
/// structural check is repeated here.
///
/// [`project`]: PnlCalculator::project
#[derive(Debug, Clone, PartialEq)]
pub struct PnlCalculator {
    total: Series,
    var_vega: Series,
    theta: Series,
    vanna: Series,
    gamma: Series,
    vega_hedge: Series,
}

impl PnlCalculator {
    /// Bundle the six per-unit component series produced by the pricing
    /// engine.
    pub fn new(
        total: Series,
        var_vega: Series,
        theta: Series,
        vanna: Series,
        gamma: Series,
        vega_hedge: Series,
    ) -> Self {
        Self {
            total,
            var_vega,
            theta,
            vanna,
            gamma,
            vega_hedge,
        }
    }

    /// Per-unit total PnL.
    pub fn total(&self) -> &Series {
        &self.total
    }

    /// Per-unit variance-vega PnL.
    pub fn var_vega(&self) -> &Series {
        &self.var_vega
    }

    /// Per-unit theta PnL.
    pub fn theta(&self) -> &Series {
        &self.theta
    }

    /// Per-unit vanna PnL.
    pub fn vanna(&self) -> &Series {
        &self.vanna
    }

    /// Per-unit gamma PnL.
    pub fn gamma(&self) -> &Series {
        &self.gamma
    }

    /// Per-unit vega-hedge PnL.
    pub fn vega_hedge(&self) -> &Series {
        &self.vega_hedge
    }

    /// Number of time steps covered by each component.
    pub fn size(&self) -> Size {
        self.total.size()
    }

    /// Project a realized position path onto the per-unit basis.
    ///
    /// Each output component is the element-wise product of the
    /// corresponding per-unit series and `position` — the PnL actually
    /// earned from that risk factor given the position held at each step.
    /// No aggregation across time happens here; summing is left to the
    /// caller.
    ///
    /// # Panics
    /// Panics if `position` does not cover the same time grid as the
    /// component series.
    pub fn project(&self, position: &Series) -> PnlBreakdown {
        PnlBreakdown {
            total: self.total.component_mul(position),
            var_vega: self.var_vega.component_mul(position),
            theta: self.theta.component_mul(position),
            vanna: self.vanna.component_mul(position),
            gamma: self.gamma.component_mul(position),
            vega_hedge: self.vega_hedge.component_mul(position),
        }
    }
}
