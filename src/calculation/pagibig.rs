//! Pag-IBIG (HDMF) contribution calculation.
//!
//! The employee rate is tiered at a 1,500-peso monthly equivalent (1%
//! below, 2% above); the employer rate is a flat 2%. Both shares are
//! capped at 100 pesos per month.

use rust_decimal::Decimal;

use super::provisional::{monthly_equivalent, period_divisor};
use crate::models::ContributionResult;

/// Returns the monthly cap applied to each Pag-IBIG share (100 pesos).
pub fn pagibig_share_cap() -> Decimal {
    Decimal::from(100)
}

/// Returns the monthly-equivalent boundary of the 1% employee tier.
fn pagibig_tier_threshold() -> Decimal {
    Decimal::from(1_500)
}

fn pagibig_lower_rate() -> Decimal {
    Decimal::new(1, 2)
}

fn pagibig_upper_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Calculates the Pag-IBIG contribution for a period.
///
/// The tier boundary and the 100-peso caps are evaluated against the
/// full-month equivalent before the provisional halving, so a provisional
/// half-salary lands in the same tier as its doubled monthly figure.
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::calculate_pagibig_contribution;
/// use rust_decimal::Decimal;
///
/// // 20,000 * 2% = 400 for each side, capped at 100.
/// let result = calculate_pagibig_contribution(Decimal::from(20_000), false);
/// assert_eq!(result.employee_share, Decimal::from(100));
/// assert_eq!(result.employer_share, Decimal::from(100));
/// assert_eq!(result.total, Decimal::from(200));
/// ```
pub fn calculate_pagibig_contribution(salary: Decimal, provisional: bool) -> ContributionResult {
    let monthly = monthly_equivalent(salary, provisional);

    let employee_rate = if monthly <= pagibig_tier_threshold() {
        pagibig_lower_rate()
    } else {
        pagibig_upper_rate()
    };

    let employee_share = (monthly * employee_rate).min(pagibig_share_cap());
    let employer_share = (monthly * pagibig_upper_rate()).min(pagibig_share_cap());

    let divisor = period_divisor(provisional);
    ContributionResult::from_shares(employee_share / divisor, employer_share / divisor)
}
