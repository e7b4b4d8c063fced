use super::InterestConvention;
use crate::annuities_certain::{ssn, ssn_simple};
use bon::builder;
use log::trace;

/// Ending balance of a savings plan, split into deposits and interest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FutureValueResult {
    pub future_value: f64,

    /// Principal plus every periodic deposit, without interest.
    pub total_deposits: f64,

    /// Always `future_value - total_deposits`.
    pub interest_earned: f64,
}

/// Future value of a lump sum plus a level deposit made at the start of each period.
///
/// # Formula
/// Compound (annuity-due):
/// ```text
/// FV = pv·(1+i)ⁿ + pmt·s̈ₙ = pv·(1+i)ⁿ + pmt·((1+i)ⁿ - 1)/i·(1+i)
/// FV = pv + pmt·n                                   when i = 0
/// ```
/// Simple:
/// ```text
/// FV = pv·(1 + i·n) + pmt·n + pmt·i·n(n+1)/2
/// ```
/// and in both cases:
/// ```text
/// total deposits  = pv + pmt·n
/// interest earned = FV - total deposits
/// ```
///
/// # Parameters
/// - `pv`: Principal at time 0 (default 0)
/// - `pmt`: Deposit per period (default 0)
/// - `i`: Interest rate per period
/// - `n`: Number of periods, may be fractional
/// - `convention`: Simple or compound interest (default compound)
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let result = fv().pv(100_000_000.0).pmt(1_000_000.0).i(0.01).n(40.92).call();
/// assert!((result.future_value - 201_013_719.9288).abs() < 1e-2);
/// assert!((result.total_deposits - 140_920_000.0).abs() < 1e-6);
/// ```
#[builder]
pub fn fv(
    #[builder(default = 0.0)] pv: f64,
    #[builder(default = 0.0)] pmt: f64,
    i: f64,
    n: f64,
    #[builder(default)] convention: InterestConvention,
) -> FutureValueResult {
    let future_value = match convention {
        InterestConvention::Compound if i == 0.0 => {
            trace!("zero rate, balance is deposits only");
            pv + pmt * n
        }
        InterestConvention::Compound => {
            let accumulation = (1.0 + i).powf(n);
            pv * accumulation + pmt * ssn().i(i).n(n).call()
        }
        InterestConvention::Simple => pv * (1.0 + i * n) + pmt * ssn_simple().i(i).n(n).call(),
    };

    let total_deposits = pv + pmt * n;
    FutureValueResult {
        future_value,
        total_deposits,
        interest_earned: future_value - total_deposits,
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_fn_fv_compound_regression() {
        let result = fv()
            .pv(100_000_000.0)
            .pmt(1_000_000.0)
            .i(0.01)
            .n(40.92)
            .convention(InterestConvention::Compound)
            .call();
        assert_relative_eq!(result.future_value, 201_013_719.928_785, max_relative = 1e-10);
        assert_abs_diff_eq!(result.total_deposits, 140_920_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.interest_earned, 60_093_719.928_785, max_relative = 1e-9);
    }

    #[test]
    fn test_fn_fv_compound_quarterly_regression() {
        // 3.41 years at 12% compounded quarterly, 3m deposited per quarter
        let result = fv()
            .pv(100_000_000.0)
            .pmt(3_000_000.0)
            .i(0.03)
            .n(13.64)
            .call();
        assert_relative_eq!(result.future_value, 200_805_605.603_678, max_relative = 1e-10);
    }

    #[test]
    fn test_fn_fv_compound_zero_rate_is_exact() {
        let pvs = [0.0, 1_000.0, 250_000.0, -10.0];
        let pmts = [100.0, 0.0, 1_234.5, 7.0];
        let terms = [12.0, 3.5, 40.92, 0.0];
        for ((pv, pmt), n) in pvs.iter().zip(pmts.iter()).zip(terms.iter()) {
            let result = fv().pv(*pv).pmt(*pmt).i(0.0).n(*n).call();
            assert_eq!(result.future_value, pv + pmt * n);
            assert_eq!(result.interest_earned, 0.0);
        }
    }

    #[test]
    fn test_fn_fv_simple_36_months() {
        let result = fv()
            .pv(100_000_000.0)
            .pmt(1_000_000.0)
            .i(0.01)
            .n(36.0)
            .convention(InterestConvention::Simple)
            .call();
        // 136m on the principal, 36m deposited, 6.66m interest on the deposits
        assert_abs_diff_eq!(result.future_value, 178_660_000.0, epsilon = 1e-4);
        assert_abs_diff_eq!(result.interest_earned, 42_660_000.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fn_fv_interest_identity() {
        let conventions = [InterestConvention::Simple, InterestConvention::Compound];
        for convention in conventions {
            for (i, n) in [(0.005, 1.0), (0.01, 40.92), (0.03, 13.64), (0.12, 3.41)] {
                let result = fv()
                    .pv(5_000.0)
                    .pmt(250.0)
                    .i(i)
                    .n(n)
                    .convention(convention)
                    .call();
                assert_eq!(result.interest_earned, result.future_value - result.total_deposits);
                assert_eq!(result.total_deposits, 5_000.0 + 250.0 * n);
            }
        }
    }

    #[test]
    fn test_fn_fv_lump_sum_only() {
        let result = fv().pv(1_000.0).i(0.05).n(10.0).call();
        assert_abs_diff_eq!(result.future_value, 1_628.894627, epsilon = 1e-6);
    }

    #[test]
    fn test_fn_fv_payment_made_in_advance() {
        // One period, deposit at the start earns one period of interest
        let compound = fv().pmt(100.0).i(0.1).n(1.0).call();
        let simple = fv()
            .pmt(100.0)
            .i(0.1)
            .n(1.0)
            .convention(InterestConvention::Simple)
            .call();
        assert_abs_diff_eq!(compound.future_value, 110.0, epsilon = 1e-9);
        assert_abs_diff_eq!(simple.future_value, 110.0, epsilon = 1e-9);
    }
}
