//! # RSSavings
//!
//! A small, type-safe Rust library for savings-growth projections under simple and compound interest.
//!
//! ## Features
//! - **Future Value**: Ending balance of a lump sum plus periodic deposits (annuity-due)
//! - **Time to Target**: Number of periods needed to reach a target amount, closed form or Newton–Raphson
//! - **Doubling Time**: Years to double a lump sum, and the rate needed to double within a horizon
//! - **Compounding Cadence**: Monthly, quarterly or yearly periods from one annual rate and a monthly deposit
//! - **Builder Pattern**: Multi-argument functions use builder pattern, parameter records are validated on build
//!
//! ## Quick Start
//!
//! ```rust
//! use rssavings::prelude::*;
//!
//! // 100m principal, 1m deposited every month, 12% a year compounded monthly
//! let params = AnnuityParameters::builder()
//!     .present_value(100_000_000.0)
//!     .periodic_payment(1_000_000.0)
//!     .annual_rate_percent(12.0)
//!     .build()?;
//!
//! let projection = params.project(3.41);
//! let target = params.time_to_target(200_000_000.0);
//! let doubling = years_to_double(12.0);
//!
//! println!("Balance after 3.41 years: {:.0}", projection.future_value);
//! println!("Years to reach 200m: {:.2}", target.years);
//! println!("Years to double at 12%: {:.2}", doubling);
//! # RSSavingsResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Solvers**: `fv`, `nper`, `solve_simple_periods`
//! - **Doubling**: `years_to_double`, `rate_to_double_in`, `years_to_double_at`, `rate_to_double_in_at`
//! - **Cadence**: `normalize`
//! - **Annuities Certain**: `aan`, `ssn`, `ssn_simple`
//! - **Interest Rate Conversions**: between nominal and effective annual rates
//!
//! ## Notes
//! - Solvers are total: degenerate inputs give `NaN` or infinite results instead of errors
//! - Rates passed to solvers are per period in decimal form (0.01 for 1% a month)
//! - Rates on [`params::AnnuityParameters`] and the doubling functions are annual percentages (12.0 for 12%)
//! - Formatting and rounding of results is left to the caller

pub type RSSavingsResult<T> = Result<T, Box<dyn std::error::Error>>;
pub mod annuities_certain;
pub mod cadence;
pub mod int_rate_convert;
pub mod params;
pub mod prelude;
pub mod projection;
pub mod solvers;
