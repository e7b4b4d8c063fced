//! # Savings Projections
//!
//! Composes the cadence normalizer with the solvers the way a savings form does: normalize
//! the annual rate and monthly deposit, then solve for whichever quantity is unknown.
//!
//! - [`AnnuityParameters::project`] — balance after a horizon in years
//! - [`AnnuityParameters::time_to_target`] — horizon needed to reach a target balance
//! - [`AnnuityParameters::growth_schedule`] — period-by-period balance as a DataFrame
//!
//! ## Example
//! ```rust
//! # use rssavings::prelude::*;
//! let params = AnnuityParameters::builder()
//!     .present_value(100_000_000.0)
//!     .periodic_payment(1_000_000.0)
//!     .annual_rate_percent(12.0)
//!     .build()?;
//!
//! let target = params.time_to_target(200_000_000.0);
//! assert!(target.is_reachable());
//! assert!((params.project(target.years).future_value - 200_000_000.0).abs() < 1e-3);
//!
//! let schedule = params.growth_schedule(1.0)?;
//! assert_eq!(schedule.height(), 13); // periods 0 to 12
//! # RSSavingsResult::Ok(())
//! ```

use crate::RSSavingsResult;
use crate::cadence::{NormalizedPeriod, normalize};
use crate::params::AnnuityParameters;
use crate::solvers::future_value::{FutureValueResult, fv};
use crate::solvers::periods::nper;
use log::debug;
use polars::prelude::*;

/// Longest schedule [`AnnuityParameters::growth_schedule`] will build, in periods.
pub const MAX_SCHEDULE_PERIODS: f64 = 12_000.0;

/// Horizon needed to reach a target balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodsResult {
    /// Number of periods at the plan's cadence, may be fractional.
    pub periods: f64,

    /// `periods / periods_per_year`.
    pub years: f64,
}

impl PeriodsResult {
    /// `false` when the target cannot be reached under the plan's parameters.
    pub fn is_reachable(&self) -> bool {
        self.periods.is_finite() && self.periods >= 0.0
    }
}

impl AnnuityParameters {
    /// Per-period rate and deposit at the plan's cadence.
    pub fn normalized(&self) -> NormalizedPeriod {
        normalize(self.annual_rate_percent, self.periodic_payment, self.cadence)
    }

    /// Balance after `years`, which may be fractional.
    pub fn project(&self, years: f64) -> FutureValueResult {
        let period = self.normalized();
        let n = period.total_periods(years);
        debug!("projecting {n} periods at {} per period", period.rate_per_period);

        fv().pv(self.present_value)
            .pmt(period.payment_per_period)
            .i(period.rate_per_period)
            .n(n)
            .convention(self.convention)
            .call()
    }

    /// Horizon needed for the balance to reach `target`.
    ///
    /// Check [`PeriodsResult::is_reachable`] before presenting the result.
    pub fn time_to_target(&self, target: f64) -> PeriodsResult {
        let period = self.normalized();
        let periods = nper()
            .i(period.rate_per_period)
            .pmt(period.payment_per_period)
            .pv(self.present_value)
            .fv(target)
            .convention(self.convention)
            .call();
        debug!("target {target} reached after {periods} periods");

        PeriodsResult {
            periods,
            years: period.years(periods),
        }
    }

    /// Balance at every whole period up to `years`, plus the final fractional period if any.
    ///
    /// Columns: `period`, `year`, `deposits`, `balance`, `interest`. The last row matches
    /// [`AnnuityParameters::project`] for the same horizon.
    pub fn growth_schedule(&self, years: f64) -> RSSavingsResult<DataFrame> {
        let period = self.normalized();
        let n = period.total_periods(years);
        if !n.is_finite() || n < 0.0 {
            return Err(format!("horizon of {years} years is not a non-negative finite number").into());
        }
        if n > MAX_SCHEDULE_PERIODS {
            return Err(format!(
                "horizon of {n} periods exceeds the schedule limit of {MAX_SCHEDULE_PERIODS}"
            )
            .into());
        }

        let whole = n.floor() as u32;
        let mut period_vec: Vec<f64> = (0..=whole).map(f64::from).collect();
        if n > f64::from(whole) {
            period_vec.push(n);
        }

        let rows: Vec<FutureValueResult> = period_vec
            .iter()
            .map(|&k| {
                fv().pv(self.present_value)
                    .pmt(period.payment_per_period)
                    .i(period.rate_per_period)
                    .n(k)
                    .convention(self.convention)
                    .call()
            })
            .collect();

        let year_vec: Vec<f64> = period_vec.iter().map(|&k| period.years(k)).collect();
        let deposits_vec: Vec<f64> = rows.iter().map(|r| r.total_deposits).collect();
        let balance_vec: Vec<f64> = rows.iter().map(|r| r.future_value).collect();
        let interest_vec: Vec<f64> = rows.iter().map(|r| r.interest_earned).collect();

        let df = DataFrame::new(vec![
            Series::new("period".into(), period_vec).into_column(),
            Series::new("year".into(), year_vec).into_column(),
            Series::new("deposits".into(), deposits_vec).into_column(),
            Series::new("balance".into(), balance_vec).into_column(),
            Series::new("interest".into(), interest_vec).into_column(),
        ])?;

        Ok(df)
    }
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cadence::CompoundingCadence;
    use crate::solvers::InterestConvention;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample_params(cadence: CompoundingCadence, convention: InterestConvention) -> AnnuityParameters {
        AnnuityParameters::builder()
            .present_value(100_000_000.0)
            .periodic_payment(1_000_000.0)
            .annual_rate_percent(12.0)
            .cadence(cadence)
            .convention(convention)
            .build()
            .expect("Failed to build AnnuityParameters")
    }

    #[test]
    fn test_project_monthly_compound() {
        let params = sample_params(CompoundingCadence::Monthly, InterestConvention::Compound);
        let result = params.project(3.41);
        assert_relative_eq!(result.future_value, 201_013_719.928_785, max_relative = 1e-9);
        assert_abs_diff_eq!(result.total_deposits, 140_920_000.0, epsilon = 1e-4);
    }

    #[test]
    fn test_project_quarterly_compound() {
        let params = sample_params(CompoundingCadence::Quarterly, InterestConvention::Compound);
        let result = params.project(3.41);
        assert_relative_eq!(result.future_value, 200_805_605.603_678, max_relative = 1e-9);
    }

    #[test]
    fn test_project_monthly_simple() {
        let params = sample_params(CompoundingCadence::Monthly, InterestConvention::Simple);
        let result = params.project(3.0);
        assert_abs_diff_eq!(result.future_value, 178_660_000.0, epsilon = 1e-3);
    }

    #[test]
    fn test_time_to_target_round_trip() {
        for convention in [InterestConvention::Compound, InterestConvention::Simple] {
            let params = sample_params(CompoundingCadence::Monthly, convention);
            let target = params.time_to_target(200_000_000.0);
            assert!(target.is_reachable());
            assert_abs_diff_eq!(target.years, target.periods / 12.0, epsilon = 1e-12);

            let balance = params.project(target.years).future_value;
            assert_relative_eq!(balance, 200_000_000.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_time_to_target_regression() {
        let params = sample_params(CompoundingCadence::Monthly, InterestConvention::Compound);
        let target = params.time_to_target(200_000_000.0);
        assert_abs_diff_eq!(target.periods, 40.582_104, epsilon = 1e-6);
        assert_abs_diff_eq!(target.years, 3.381_842, epsilon = 1e-6);
    }

    #[test]
    fn test_time_to_target_unreachable() {
        let params = AnnuityParameters::builder()
            .present_value(100.0)
            .annual_rate_percent(12.0)
            .build()
            .unwrap();
        assert!(!params.time_to_target(50.0).is_reachable());

        let params = AnnuityParameters::builder()
            .annual_rate_percent(12.0)
            .build()
            .unwrap();
        assert!(!params.time_to_target(50.0).is_reachable());
    }

    #[test]
    fn test_time_to_target_flat_simple_balance() {
        // No rate and no deposits: the balance stays at the principal under both conventions
        for convention in [InterestConvention::Simple, InterestConvention::Compound] {
            let params = AnnuityParameters::builder()
                .present_value(100.0)
                .annual_rate_percent(0.0)
                .convention(convention)
                .build()
                .unwrap();
            let target = params.time_to_target(200.0);
            assert!(!target.is_reachable());
            assert_eq!(target.periods, f64::INFINITY);
        }
    }

    #[test]
    fn test_growth_schedule_rows() {
        let params = sample_params(CompoundingCadence::Monthly, InterestConvention::Compound);
        let df = params.growth_schedule(3.41).unwrap();
        // Periods 0..=40 plus the fractional 40.92
        assert_eq!(df.height(), 42);
        assert_eq!(
            df.get_column_names(),
            vec!["period", "year", "deposits", "balance", "interest"]
        );

        let balance = df.column("balance").unwrap().f64().unwrap();
        assert_eq!(balance.get(0), Some(100_000_000.0));
        let last = balance.get(41).unwrap();
        assert_relative_eq!(last, params.project(3.41).future_value, max_relative = 1e-12);

        let period = df.column("period").unwrap().f64().unwrap();
        assert_abs_diff_eq!(period.get(41).unwrap(), 40.92, epsilon = 1e-9);
    }

    #[test]
    fn test_growth_schedule_whole_years() {
        let params = sample_params(CompoundingCadence::Yearly, InterestConvention::Simple);
        let df = params.growth_schedule(2.0).unwrap();
        assert_eq!(df.height(), 3);

        let year = df.column("year").unwrap().f64().unwrap();
        assert_eq!(year.get(2), Some(2.0));
    }

    #[test]
    fn test_growth_schedule_rejects_bad_horizon() {
        let params = sample_params(CompoundingCadence::Monthly, InterestConvention::Compound);
        assert!(params.growth_schedule(-1.0).is_err());
        assert!(params.growth_schedule(f64::NAN).is_err());
        assert!(params.growth_schedule(5_000.0).is_err());
    }
}
