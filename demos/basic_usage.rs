//! # RSSavings Basic Usage Example
//!
//! This example demonstrates the three questions a savings form asks of the rssavings crate:
//! how much will I have, how long until I reach a target, and how long until my money doubles.
//!
//! Run with `RUST_LOG=debug` to see the solver log lines.

use rssavings::prelude::*;

/// Same plan at another cadence or convention, validated again on build.
fn plan_with(
    params: &AnnuityParameters,
    cadence: CompoundingCadence,
    convention: InterestConvention,
) -> RSSavingsResult<AnnuityParameters> {
    AnnuityParameters::builder()
        .present_value(params.present_value)
        .periodic_payment(params.periodic_payment)
        .annual_rate_percent(params.annual_rate_percent)
        .cadence(cadence)
        .convention(convention)
        .build()
}

fn main() -> RSSavingsResult<()> {
    env_logger::init();

    println!("RSSavings Basic Usage Example");
    println!("=============================");
    println!();

    // 100m principal, 1m deposited every month, 12% a year
    let params = AnnuityParameters::builder()
        .present_value(100_000_000.0)
        .periodic_payment(1_000_000.0)
        .annual_rate_percent(12.0)
        .build()?;

    println!("=== Balance after 3.41 years ===");
    for cadence in [
        CompoundingCadence::Monthly,
        CompoundingCadence::Quarterly,
        CompoundingCadence::Yearly,
    ] {
        for convention in [InterestConvention::Compound, InterestConvention::Simple] {
            let plan = plan_with(&params, cadence, convention)?;
            let result = plan.project(3.41);
            println!(
                "  {cadence:?}/{convention:?}: balance {:.0}, deposits {:.0}, interest {:.0}",
                result.future_value, result.total_deposits, result.interest_earned
            );
        }
    }

    println!("\n=== Time to reach 200m ===");
    for convention in [InterestConvention::Compound, InterestConvention::Simple] {
        let plan = plan_with(&params, params.cadence, convention)?;
        let target = plan.time_to_target(200_000_000.0);
        if target.is_reachable() {
            println!(
                "  {convention:?}: {:.2} periods ({:.2} years)",
                target.periods, target.years
            );
        } else {
            println!("  {convention:?}: target unreachable");
        }
    }

    println!("\n=== Doubling a lump sum ===");
    let years = years_to_double(12.0);
    println!("  At 12% a year: {years:.2} years");
    println!("  To double in 5 years: {:.2}% a year", rate_to_double_in(5.0));
    println!(
        "  At 12% compounded monthly: {:.2} years",
        years_to_double_at(12.0, CompoundingCadence::Monthly)
    );

    println!("\n=== First year, month by month ===");
    let schedule = params.growth_schedule(1.0)?;
    println!("{schedule}");

    Ok(())
}
