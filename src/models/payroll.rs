//! Aggregated payroll record model.
//!
//! The payroll subsystem sums an employee's earnings across the one or two
//! semi-monthly runs composing a calendar month and hands the engine one
//! [`EmployeeAggregateRecord`] per employee. Whether the month is
//! provisional (only one run processed) is determined by that subsystem
//! and passed alongside the records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee's summed payroll figures for a calendar month.
///
/// # Example
///
/// ```
/// use contribution_engine::models::EmployeeAggregateRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = EmployeeAggregateRecord {
///     emp_id: "emp_001".to_string(),
///     total_gross: Decimal::from_str("25000").unwrap(),
///     total_taxable: Decimal::from_str("23500").unwrap(),
///     total_tax_withheld: Decimal::from_str("1062.45").unwrap(),
/// };
/// assert_eq!(record.emp_id, "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAggregateRecord {
    /// Identifier matching an [`EmployeeIdentity`](super::EmployeeIdentity) on the roster.
    pub emp_id: String,
    /// Gross earnings summed across the month's processed runs.
    pub total_gross: Decimal,
    /// Taxable earnings summed across the month's processed runs.
    pub total_taxable: Decimal,
    /// Withholding tax already deducted across the month's processed runs.
    pub total_tax_withheld: Decimal,
}
