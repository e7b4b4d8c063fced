use super::InterestConvention;
use bon::builder;
use log::{debug, trace};

/// Iteration cap of the simple-interest Newton–Raphson solver.
pub const MAX_NEWTON_ITERATIONS: u32 = 100;

/// Step size below which the Newton–Raphson solver stops.
pub const NEWTON_TOLERANCE: f64 = 1e-4;

/// Outcome of the simple-interest Newton–Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOutcome {
    /// Last iterate, returned even when the solver did not converge. Infinite when the
    /// balance is flat and away from the target.
    pub periods: f64,

    /// Newton steps taken.
    pub iterations: u32,

    /// `false` when the iteration cap was hit or the balance is flat away from the target.
    pub converged: bool,
}

/// Number of periods needed for a savings plan to grow from `pv` to `fv`.
///
/// Inverse of [`fv`](super::future_value::fv) for the same deposit timing (start of period).
///
/// # Formula
/// Compound:
/// ```text
/// n = ln((fv·i + P) / (pv·i + P)) / ln(1 + i),   P = pmt·(1 + i)
/// n = (fv - pv) / pmt                             when i = 0
/// ```
/// Simple: no closed form, the root of
/// ```text
/// f(n) = pv·(1 + i·n) + pmt·n + pmt·i·n(n+1)/2 - fv
/// ```
/// is found by Newton–Raphson, see [`solve_simple_periods`].
///
/// # Parameters
/// - `i`: Interest rate per period
/// - `pmt`: Deposit per period (default 0)
/// - `pv`: Principal at time 0 (default 0)
/// - `fv`: Target balance
/// - `convention`: Simple or compound interest (default compound)
///
/// # Returns
/// Fractional number of periods. Negative, infinite or `NaN` results mean the target is
/// unreachable under these parameters.
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let n = nper().i(0.01).pmt(1_000_000.0).pv(100_000_000.0).fv(200_000_000.0).call();
/// assert!((n - 40.5821).abs() < 1e-4);
/// ```
#[builder]
pub fn nper(
    i: f64,
    #[builder(default = 0.0)] pmt: f64,
    #[builder(default = 0.0)] pv: f64,
    fv: f64,
    #[builder(default)] convention: InterestConvention,
) -> f64 {
    match convention {
        InterestConvention::Compound => compound_periods(i, pmt, pv, fv),
        InterestConvention::Simple => solve_simple_periods(i, pmt, pv, fv).periods,
    }
}

/// Newton–Raphson solver for the simple-interest horizon, exposing convergence.
///
/// Starts from `n = 1` and stops once a step is smaller than [`NEWTON_TOLERANCE`] or after
/// [`MAX_NEWTON_ITERATIONS`] steps. On convergence the iterate produced by the final step is
/// returned, not the one before it.
///
/// A zero derivative means the balance no longer moves with `n`. The iteration stops there:
/// if the target is already met the current iterate is returned, otherwise the horizon is
/// infinite (positive when the target lies above the balance, negative when below).
pub fn solve_simple_periods(i: f64, pmt: f64, pv: f64, fv: f64) -> NewtonOutcome {
    let mut n = 1.0;

    for iteration in 1..=MAX_NEWTON_ITERATIONS {
        let f = pv * (1.0 + i * n) + pmt * n + pmt * i * n * (n + 1.0) / 2.0 - fv;
        let df = pv * i + pmt + pmt * i * (2.0 * n + 1.0) / 2.0;
        if df == 0.0 {
            if f == 0.0 {
                return NewtonOutcome {
                    periods: n,
                    iterations: iteration,
                    converged: true,
                };
            }
            debug!("simple periods: balance is flat at n = {n}, target {fv} never reached");
            return NewtonOutcome {
                periods: -f.signum() * f64::INFINITY,
                iterations: iteration,
                converged: false,
            };
        }

        let n_next = n - f / df;
        let step = (n_next - n).abs();
        n = n_next;
        if step < NEWTON_TOLERANCE {
            trace!("simple periods converged to {n} after {iteration} steps");
            return NewtonOutcome {
                periods: n,
                iterations: iteration,
                converged: true,
            };
        }
    }

    debug!("simple periods: no convergence after {MAX_NEWTON_ITERATIONS} steps, returning {n}");
    NewtonOutcome {
        periods: n,
        iterations: MAX_NEWTON_ITERATIONS,
        converged: false,
    }
}

fn compound_periods(i: f64, pmt: f64, pv: f64, fv: f64) -> f64 {
    if i == 0.0 {
        trace!("zero rate, periods from deposits only");
        return (fv - pv) / pmt;
    }
    let pmt_adj = pmt * (1.0 + i);
    ((fv * i + pmt_adj) / (pv * i + pmt_adj)).ln() / (1.0 + i).ln()
}
