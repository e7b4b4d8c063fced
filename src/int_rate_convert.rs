/// Convert a nominal annual rate to the effective annual rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
/// where:
/// - `nom_i` is the nominal annual rate, compounded m times per year
/// - `m` is the number of compounding periods per year
///
/// # Example
/// ```rust
/// # use rssavings::prelude::nom_i_to_eff_i;
/// let eff = nom_i_to_eff_i(0.12, 12); // 12% compounded monthly
/// assert!((eff - 0.126825).abs() < 1e-6);
/// ```
pub fn nom_i_to_eff_i(nom_i: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    (1.0 + nom_i / m_f64).powf(m_f64) - 1.0
}

/// Convert an effective annual rate to the nominal annual rate compounded m times per year.
///
/// # Formula
/// ```text
/// i⁽ᵐ⁾ = m[(1 + i)¹⁄ᵐ - 1]
/// ```
///
/// # Example
/// ```rust
/// # use rssavings::prelude::eff_i_to_nom_i;
/// let nom = eff_i_to_nom_i(0.1255088, 4); // effective yield of 12% compounded quarterly
/// assert!((nom - 0.12).abs() < 1e-6);
/// ```
pub fn eff_i_to_nom_i(eff_i: f64, m: u32) -> f64 {
    let m_f64 = m as f64;
    m_f64 * ((1.0 + eff_i).powf(1.0 / m_f64) - 1.0)
}
