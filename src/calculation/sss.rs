//! SSS (Social Security System) contribution calculation.
//!
//! Contributions are sized against the Monthly Salary Credit, not the raw
//! salary: the monthly equivalent is resolved to an MSC bracket and the
//! statutory rates (4.5% employee, 9.5% employer) apply to that credit.

use rust_decimal::Decimal;

use super::provisional::{monthly_equivalent, period_divisor};
use super::salary_credit::monthly_salary_credit;
use crate::models::ContributionResult;

/// Returns the employee's SSS contribution rate (4.5% of the MSC).
fn sss_employee_rate() -> Decimal {
    Decimal::new(45, 3)
}

/// Returns the employer's SSS contribution rate (9.5% of the MSC).
fn sss_employer_rate() -> Decimal {
    Decimal::new(95, 3)
}

/// Calculates the SSS contribution for a period.
///
/// The salary is scaled to its monthly equivalent (doubled when the period
/// is provisional), resolved to a Monthly Salary Credit, and the statutory
/// rates are applied. For a provisional period both shares are halved so
/// only the current half-month's portion is reported.
///
/// A zero salary still yields the minimum-bracket contribution; the MSC
/// floor is mandated policy, not an error condition.
///
/// # Arguments
///
/// * `salary` - Gross salary for the period (half-month when provisional)
/// * `provisional` - Whether only one semi-monthly run exists for the month
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::calculate_sss_contribution;
/// use rust_decimal::Decimal;
///
/// let result = calculate_sss_contribution(Decimal::ZERO, false);
/// assert_eq!(result.employee_share, Decimal::from(180));
/// assert_eq!(result.employer_share, Decimal::from(380));
/// assert_eq!(result.total, Decimal::from(560));
/// ```
pub fn calculate_sss_contribution(salary: Decimal, provisional: bool) -> ContributionResult {
    let msc = monthly_salary_credit(monthly_equivalent(salary, provisional));
    let divisor = period_divisor(provisional);

    let employee_share = msc * sss_employee_rate() / divisor;
    let employer_share = msc * sss_employer_rate() / divisor;

    ContributionResult::from_shares(employee_share, employer_share)
}
