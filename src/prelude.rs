//! # RSSavings Prelude
//!
//! Conveniently re-exports the most common types and functions for savings calculations.
//! Import this module to access all primary RSSavings features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rssavings::prelude::*;
//! let params = AnnuityParameters::builder()
//!     .present_value(10_000.0)
//!     .periodic_payment(200.0)
//!     .annual_rate_percent(6.0)
//!     .cadence(CompoundingCadence::Quarterly)
//!     .build()?;
//! let result = params.project(10.0);
//! println!("Balance after 10 years: {:.2}", result.future_value);
//! # RSSavingsResult::Ok(())
//! ```

// Package Result type for RSSavings functions
pub use crate::RSSavingsResult;

// Interest rate conversion functions
pub use crate::int_rate_convert::*;

// Certain annuities
pub use crate::annuities_certain::*;

// Cadence normalization
pub use crate::cadence::{CompoundingCadence, NormalizedPeriod, normalize};

// Solvers
pub use crate::solvers::InterestConvention;
pub use crate::solvers::doubling::*;
pub use crate::solvers::future_value::*;
pub use crate::solvers::periods::*;

// Parameter record and projections
pub use crate::params::AnnuityParameters;
pub use crate::projection::{MAX_SCHEDULE_PERIODS, PeriodsResult};

// Polars types returned by growth schedules
pub use polars::prelude::{DataFrame, PolarsError, PolarsResult, Series};
