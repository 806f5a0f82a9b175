//! End-to-end attribution tests: per-unit basis → position projection →
//! breakdown algebra across strategy legs and sub-periods.

use va_math::Series;
use va_pnl::{PnlBreakdown, PnlCalculator};

fn basis() -> PnlCalculator {
    PnlCalculator::new(
        Series::from_slice(&[1.0, 2.0, 3.0]),
        Series::from_slice(&[0.1, 0.2, 0.3]),
        Series::from_slice(&[-0.05, -0.05, -0.05]),
        Series::zeros(3),
        Series::from_slice(&[0.5, 0.5, 0.5]),
        Series::zeros(3),
    )
}

#[test]
fn constant_ten_lot_position() {
    let pnl = basis().project(&Series::from_element(3, 10.0));
    assert_eq!(pnl.total.as_slice(), &[10.0, 20.0, 30.0]);
    assert_eq!(pnl.theta.as_slice(), &[-0.5, -0.5, -0.5]);
}

/// Dyadic per-unit values, so the linearity identities below hold to the
/// last bit under integer positions.
fn dyadic_basis() -> PnlCalculator {
    PnlCalculator::new(
        Series::from_slice(&[1.0, 2.0, 3.0]),
        Series::from_slice(&[0.125, 0.25, 0.375]),
        Series::from_element(3, -0.0625),
        Series::zeros(3),
        Series::from_element(3, 0.5),
        Series::zeros(3),
    )
}

#[test]
fn strategy_minus_hedge_nets_out() {
    let calc = dyadic_basis();
    let strategy = calc.project(&Series::from_element(3, 10.0));
    let hedge = calc.project(&Series::from_element(3, 4.0));

    let net = &strategy - &hedge;
    assert_eq!(net, calc.project(&Series::from_element(3, 6.0)));
}

#[test]
fn leg_aggregation_matches_summed_position() {
    let calc = dyadic_basis();
    let leg_a = Series::from_slice(&[1.0, 0.0, 2.0]);
    let leg_b = Series::from_slice(&[3.0, 5.0, -2.0]);
    let combined = Series::from_slice(&[4.0, 5.0, 0.0]);

    // Projection is linear in the position, so summing breakdowns of the
    // legs equals projecting the summed position.
    let aggregate = &calc.project(&leg_a) + &calc.project(&leg_b);
    assert_eq!(aggregate, calc.project(&combined));
}

#[test]
fn sub_period_splice_reassembles_full_window() {
    let calc = basis();
    let full = calc.project(&Series::from_slice(&[10.0, 10.0, 10.0]));
    let first_day = calc.project(&Series::from_slice(&[10.0, 0.0, 0.0]));
    let rest = calc.project(&Series::from_slice(&[0.0, 10.0, 10.0]));

    assert_eq!(&first_day + &rest, full);
    assert_eq!(&full - &rest, first_day);
}

#[test]
fn caller_sums_over_time_for_reports() {
    let pnl = basis().project(&Series::from_element(3, 10.0));
    assert_eq!(pnl.total.sum(), 60.0);
    assert_eq!(pnl.total.cumulative().as_slice(), &[10.0, 30.0, 60.0]);
}

#[test]
fn zero_breakdown_accumulator_seed() {
    // Fold a day-by-day ledger starting from the additive identity.
    let calc = basis();
    let days = [
        Series::from_slice(&[1.0, 0.0, 0.0]),
        Series::from_slice(&[0.0, 1.0, 0.0]),
        Series::from_slice(&[0.0, 0.0, 1.0]),
    ];
    let ledger = days
        .iter()
        .fold(PnlBreakdown::zeros(3), |acc, day| &acc + &calc.project(day));
    assert_eq!(ledger, calc.project(&Series::from_element(3, 1.0)));
}
