//! # Savings Solvers
//!
//! Closed-form and iterative solvers that convert between present value, periodic deposit,
//! rate per period, number of periods and future value.
//!
//! ## Submodules
//! - [`future_value`] — Ending balance of a lump sum plus periodic deposits (`fv`)
//! - [`periods`] — Number of periods needed to reach a target balance (`nper`)
//! - [`doubling`] — Years to double a lump sum and the rate needed to double it
//!
//! ## Usage Example
//! ```rust
//! # use rssavings::prelude::*;
//! // 100m principal, 1m deposited at the start of each month, 1% a month, 36 months
//! let result = fv()
//!     .pv(100_000_000.0)
//!     .pmt(1_000_000.0)
//!     .i(0.01)
//!     .n(36.0)
//!     .convention(InterestConvention::Simple)
//!     .call();
//! assert!((result.future_value - 178_660_000.0).abs() < 1e-4);
//!
//! // Feed the balance back in to recover the horizon
//! let n = nper()
//!     .pv(100_000_000.0)
//!     .pmt(1_000_000.0)
//!     .i(0.01)
//!     .fv(result.future_value)
//!     .convention(InterestConvention::Simple)
//!     .call();
//! assert!((n - 36.0).abs() < 1e-2);
//! ```
//!
//! ## Notes
//! - Solvers never validate: nonsensical inputs produce `NaN`, infinite or negative results.
//! - Exact zero rates take their own closed forms instead of relying on floating-point limits.

pub mod doubling;
pub mod future_value;
pub mod periods;

/// Interest convention deciding which formula family applies.
///
/// - **Compound**: interest is credited on principal plus previously credited interest
/// - **Simple**: interest is credited on each deposit's own principal only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InterestConvention {
    Simple,

    #[default]
    Compound,
}
