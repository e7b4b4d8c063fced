use crate::cadence::CompoundingCadence;
use crate::int_rate_convert::{eff_i_to_nom_i, nom_i_to_eff_i};

/// Years needed to double a lump sum at an annual percentage rate compounded yearly.
///
/// # Formula
/// ```text
/// t = ln 2 / ln(1 + pct/100)
/// ```
///
/// Defined for `annual_rate_percent > 0`; other inputs return `NaN`.
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let years = years_to_double(12.0);
/// assert!((years - 6.1163).abs() < 1e-4); // not quite the Rule of 72 estimate of 6
/// ```
pub fn years_to_double(annual_rate_percent: f64) -> f64 {
    if annual_rate_percent.is_nan() || annual_rate_percent <= 0.0 {
        return f64::NAN;
    }
    2f64.ln() / (1.0 + annual_rate_percent / 100.0).ln()
}

/// Annual percentage rate, compounded yearly, that doubles a lump sum in `years`.
///
/// # Formula
/// ```text
/// pct = (2^(1/t) - 1) × 100
/// ```
///
/// Defined for `years > 0`; other inputs return `NaN`.
///
/// # Example
/// ```rust
/// # use rssavings::prelude::*;
/// let pct = rate_to_double_in(6.0);
/// assert!((pct - 12.2462).abs() < 1e-4);
/// ```
pub fn rate_to_double_in(years: f64) -> f64 {
    if years.is_nan() || years <= 0.0 {
        return f64::NAN;
    }
    (2f64.powf(1.0 / years) - 1.0) * 100.0
}

/// Years needed to double a lump sum at a nominal annual percentage rate compounded at `cadence`.
///
/// Equal to [`years_to_double`] for [`CompoundingCadence::Yearly`].
pub fn years_to_double_at(annual_rate_percent: f64, cadence: CompoundingCadence) -> f64 {
    if annual_rate_percent.is_nan() || annual_rate_percent <= 0.0 {
        return f64::NAN;
    }
    let eff_i = nom_i_to_eff_i(annual_rate_percent / 100.0, cadence.periods_per_year());
    years_to_double(eff_i * 100.0)
}

/// Nominal annual percentage rate compounded at `cadence` that doubles a lump sum in `years`.
///
/// Equal to [`rate_to_double_in`] for [`CompoundingCadence::Yearly`].
pub fn rate_to_double_in_at(years: f64, cadence: CompoundingCadence) -> f64 {
    let eff_pct = rate_to_double_in(years);
    eff_i_to_nom_i(eff_pct / 100.0, cadence.periods_per_year()) * 100.0
}
