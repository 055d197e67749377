//! PhilHealth premium calculation.
//!
//! The premium is a flat 5% of the monthly equivalent, with the salary base
//! clamped to the mandated band, and is split evenly between employee and
//! employer.

use rust_decimal::Decimal;

use super::provisional::{monthly_equivalent, period_divisor};
use crate::models::ContributionResult;

/// Returns the minimum monthly salary base for the premium (10,000 pesos).
pub fn philhealth_premium_floor() -> Decimal {
    Decimal::from(10_000)
}

/// Returns the maximum monthly salary base for the premium (100,000 pesos).
pub fn philhealth_premium_ceiling() -> Decimal {
    Decimal::from(100_000)
}

/// Returns the PhilHealth premium rate (5% of the clamped salary base).
fn philhealth_premium_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Calculates the PhilHealth premium for a period.
///
/// The monthly equivalent is clamped to the premium band, the 5% premium is
/// split evenly between employee and employer, and provisional periods
/// report half of each share.
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::calculate_philhealth_contribution;
/// use rust_decimal::Decimal;
///
/// // Above the ceiling the base clamps to 100,000.
/// let result = calculate_philhealth_contribution(Decimal::from(150_000), false);
/// assert_eq!(result.employee_share, Decimal::from(2_500));
/// assert_eq!(result.employer_share, Decimal::from(2_500));
/// assert_eq!(result.total, Decimal::from(5_000));
/// ```
pub fn calculate_philhealth_contribution(salary: Decimal, provisional: bool) -> ContributionResult {
    let base = monthly_equivalent(salary, provisional)
        .clamp(philhealth_premium_floor(), philhealth_premium_ceiling());
    let premium = base * philhealth_premium_rate();
    let share = premium / Decimal::TWO / period_divisor(provisional);

    ContributionResult::from_shares(share, share)
}
