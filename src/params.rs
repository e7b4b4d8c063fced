//! # Savings Plan Parameters (AnnuityParameters)
//!
//! The input record a savings form collects: principal, monthly deposit, annual rate,
//! compounding cadence and interest convention.
//!
//! ## Quick Start
//! ```rust
//! # use rssavings::prelude::*;
//! let params = AnnuityParameters::builder()
//!     .present_value(100_000_000.0)
//!     .periodic_payment(1_000_000.0)
//!     .annual_rate_percent(12.0)
//!     .cadence(CompoundingCadence::Quarterly)
//!     .convention(InterestConvention::Simple)
//!     .build()?;
//! println!("Deposit per quarter: {}", params.normalized().payment_per_period);
//! # RSSavingsResult::Ok(())
//! ```
//!
//! ## Configuration Options
//! - **present_value**: Principal at time 0 (default 0)
//! - **periodic_payment**: Deposit per *month*, scaled to the cadence when normalized (default 0)
//! - **annual_rate_percent**: Nominal annual rate in percent, 12.0 for 12%
//! - **cadence**: Monthly, quarterly or yearly compounding (default monthly)
//! - **convention**: Simple or compound interest (default compound)
//!
//! ## Validation
//! Building rejects non-finite numbers and rates of -100% or below. Zero and negative
//! deposits are accepted; the solvers evaluate them as-is. Fields are public for reading;
//! a record assembled or changed through them directly is not checked, so derive variants
//! through the builder.

use crate::RSSavingsResult;
use crate::cadence::CompoundingCadence;
use crate::solvers::InterestConvention;
use bon::bon;
use garde::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Validate)]
#[garde(allow_unvalidated)]
pub struct AnnuityParameters {
    /// Principal at time 0.
    #[garde(custom(validate_finite))]
    pub present_value: f64,

    /// Nominal monthly deposit.
    #[garde(custom(validate_finite))]
    pub periodic_payment: f64,

    /// Nominal annual rate in percent.
    #[garde(custom(validate_annual_rate))]
    pub annual_rate_percent: f64,

    pub cadence: CompoundingCadence,

    pub convention: InterestConvention,
}

fn validate_finite(value: &f64, _context: &()) -> garde::Result {
    if !value.is_finite() {
        return Err(garde::Error::new(format!(
            "{value} is not a finite amount"
        )));
    }
    Ok(())
}

/// A rate of -100% or below has no per-period growth factor to take a logarithm of.
fn validate_annual_rate(value: &f64, context: &()) -> garde::Result {
    validate_finite(value, context)?;
    if *value <= -100.0 {
        return Err(garde::Error::new(format!(
            "annual rate {value}% must be greater than -100%"
        )));
    }
    Ok(())
}

#[bon]
impl AnnuityParameters {
    #[builder]
    pub fn new(
        #[builder(default = 0.0)] present_value: f64,
        #[builder(default = 0.0)] periodic_payment: f64,
        annual_rate_percent: f64,
        #[builder(default)] cadence: CompoundingCadence,
        #[builder(default)] convention: InterestConvention,
    ) -> RSSavingsResult<Self> {
        let params = AnnuityParameters {
            present_value,
            periodic_payment,
            annual_rate_percent,
            cadence,
            convention,
        };

        params
            .validate()
            .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

        Ok(params)
    }
}
