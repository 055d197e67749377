//! Contribution result model.
//!
//! This module defines [`ContributionResult`], the output of every
//! share-based statutory contribution calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employee and employer shares of a statutory contribution.
///
/// `total` is always the sum of the two shares. Construct values through
/// [`ContributionResult::from_shares`] so the invariant holds by
/// construction rather than by convention.
///
/// # Example
///
/// ```
/// use contribution_engine::models::ContributionResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = ContributionResult::from_shares(
///     Decimal::from_str("180").unwrap(),
///     Decimal::from_str("380").unwrap(),
/// );
/// assert_eq!(result.total, Decimal::from_str("560").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// The portion deducted from the employee's pay.
    pub employee_share: Decimal,
    /// The portion remitted by the employer.
    pub employer_share: Decimal,
    /// The combined remittance (`employee_share + employer_share`).
    pub total: Decimal,
}

impl ContributionResult {
    /// Builds a result from the two shares, deriving `total` as their sum.
    pub fn from_shares(employee_share: Decimal, employer_share: Decimal) -> Self {
        Self {
            employee_share,
            employer_share,
            total: employee_share + employer_share,
        }
    }
}
