//! # Compounding Cadence
//!
//! Converts an annual percentage rate and a nominal *monthly* deposit into per-period units
//! for the chosen compounding cadence.
//!
//! | Cadence     | Rate per period   | Deposit per period | Periods per year |
//! |-------------|-------------------|--------------------|------------------|
//! | `Monthly`   | pct / 100 / 12    | deposit            | 12               |
//! | `Quarterly` | pct / 100 / 4     | deposit × 3        | 4                |
//! | `Yearly`    | pct / 100         | deposit × 12       | 1                |
//!
//! ## Example
//! ```rust
//! # use rssavings::prelude::*;
//! let period = normalize(12.0, 1_000_000.0, CompoundingCadence::Quarterly);
//! assert_eq!(period.periods_per_year, 4);
//! assert_eq!(period.payment_per_period, 3_000_000.0);
//! assert!((period.rate_per_period - 0.03).abs() < 1e-15);
//! ```

use crate::int_rate_convert::nom_i_to_eff_i;

/// How often interest is credited and deposits are collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompoundingCadence {
    /// Twelve periods a year.
    #[default]
    Monthly,

    /// Four periods a year, three monthly deposits per period.
    Quarterly,

    /// One period a year, twelve monthly deposits per period.
    Yearly,
}

impl CompoundingCadence {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingCadence::Monthly => 12,
            CompoundingCadence::Quarterly => 4,
            CompoundingCadence::Yearly => 1,
        }
    }

    /// Number of monthly deposits that fall into one period.
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

/// Per-period rate and deposit for one cadence. Only produced by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPeriod {
    /// Interest rate per period in decimal form.
    pub rate_per_period: f64,

    /// Deposit made at the start of each period.
    pub payment_per_period: f64,

    /// 12, 4 or 1.
    pub periods_per_year: u32,
}

impl NormalizedPeriod {
    /// Number of periods in a horizon expressed in years (may be fractional).
    pub fn total_periods(&self, years: f64) -> f64 {
        years * self.periods_per_year as f64
    }

    /// Horizon in years for a number of periods.
    pub fn years(&self, periods: f64) -> f64 {
        periods / self.periods_per_year as f64
    }

    /// Effective annual yield of the per-period rate.
    ///
    /// 12% compounded monthly yields about 12.68% a year.
    pub fn effective_annual_rate(&self) -> f64 {
        let nominal = self.rate_per_period * self.periods_per_year as f64;
        nom_i_to_eff_i(nominal, self.periods_per_year)
    }
}

/// Normalize an annual percentage rate and a nominal monthly deposit to the given cadence.
///
/// Every real input is accepted, including zero or negative rates and deposits.
pub fn normalize(
    annual_rate_percent: f64,
    nominal_monthly_payment: f64,
    cadence: CompoundingCadence,
) -> NormalizedPeriod {
    let periods_per_year = cadence.periods_per_year();
    let rate_per_period = match cadence {
        CompoundingCadence::Monthly => annual_rate_percent / 100.0 / 12.0,
        CompoundingCadence::Quarterly => annual_rate_percent / 100.0 / 4.0,
        CompoundingCadence::Yearly => annual_rate_percent / 100.0,
    };
    let payment_per_period = nominal_monthly_payment * cadence.months_per_period() as f64;

    NormalizedPeriod {
        rate_per_period,
        payment_per_period,
        periods_per_year,
    }
}
