//! Annuity-certain factors for a level deposit of 1 per period.
//!
//! The term `n` is a real number so that fractional horizons (e.g. 3.41 years of monthly
//! periods) can be evaluated directly. A zero rate is handled explicitly in every factor.

use bon::builder;

/// Present value of an annuity-certain due (in advance).
///
/// Deposit of 1 at the start of each of n periods, valued at time 0.
///
/// # Formula
/// ```text
/// äₙ = (1 - vⁿ) / d
/// ```
/// where:
/// - `v = 1/(1+i)` is the discount factor
/// - `d = i/(1+i)` is the rate of discount per period
/// - `i` is the interest rate per period
/// - `n` is the number of periods (may be fractional)
///
/// With `i = 0` the annuity is worth exactly `n`.
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let annuity_due = aan().i(0.01).n(12.0).call();
/// assert!((annuity_due - 11.367628).abs() < 1e-6);
/// ```
#[builder]
pub fn aan(i: f64, n: f64) -> f64 {
    if i == 0.0 {
        return n;
    }
    let v = 1.0 / (1.0 + i);
    let d = i / (1.0 + i);
    // äₙ = (1 - vⁿ) / d
    (1.0 - v.powf(n)) / d
}

/// Accumulated value of an annuity-certain due (in advance).
///
/// Value at the end of period n of a deposit of 1 at the start of each period.
///
/// # Formula
/// ```text
/// s̈ₙ = äₙ · (1 + i)ⁿ = ((1 + i)ⁿ - 1) / i · (1 + i)
/// ```
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let accumulated = ssn().i(0.01).n(12.0).call();
/// assert!((accumulated - 12.809328).abs() < 1e-6);
/// ```
#[builder]
pub fn ssn(i: f64, n: f64) -> f64 {
    let annuity = aan().i(i).n(n).call();
    let factor = (1.0 + i).powf(n);
    annuity * factor
}

/// Accumulated value of a deposit of 1 per period earning simple interest.
///
/// Each deposit earns simple interest for the periods it has been outstanding, which gives
/// a triangular-number weighting of the interest term.
///
/// # Formula
/// ```text
/// s̈ₙ (simple) = n + i · n(n + 1) / 2
/// ```
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let accumulated = ssn_simple().i(0.01).n(12.0).call();
/// assert!((accumulated - 12.78).abs() < 1e-12);
/// ```
#[builder]
pub fn ssn_simple(i: f64, n: f64) -> f64 {
    n + i * n * (n + 1.0) / 2.0
}
