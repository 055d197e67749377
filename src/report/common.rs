//! Shared plumbing for the per-scheme report builders.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::EmployerProfile;
use crate::models::{EmployeeAggregateRecord, EmployeeIdentity};

/// Builds an identity lookup keyed by employee ID.
pub(crate) fn identity_index(
    employees: &[EmployeeIdentity],
) -> HashMap<&str, &EmployeeIdentity> {
    employees.iter().map(|e| (e.emp_id.as_str(), e)).collect()
}

/// Joins aggregate records against the roster, preserving input order.
///
/// Records with no matching roster identity are dropped from the output.
/// Downstream reconciliation counts rows against resolved identities, so
/// the drop is silent: a debug trace only, never a warning or an error.
pub(crate) fn join_roster<'a>(
    employees: &'a [EmployeeIdentity],
    records: &'a [EmployeeAggregateRecord],
) -> Vec<(&'a EmployeeAggregateRecord, &'a EmployeeIdentity)> {
    let index = identity_index(employees);

    records
        .iter()
        .filter_map(|record| match index.get(record.emp_id.as_str()) {
            Some(identity) => Some((record, *identity)),
            None => {
                debug!(emp_id = %record.emp_id, "payroll record has no roster match; dropped from report");
                None
            }
        })
        .collect()
}

/// Formats the report period, e.g. "January 2026" or
/// "January 2026 (Provisional)".
pub(crate) fn period_label(month: NaiveDate, provisional: bool) -> String {
    let label = month.format("%B %Y").to_string();
    if provisional {
        format!("{} (Provisional)", label)
    } else {
        label
    }
}

/// Builds the ordered header block common to every scheme report.
pub(crate) fn scheme_header(
    employer: &EmployerProfile,
    number_label: &str,
    number: &str,
    month: NaiveDate,
    provisional: bool,
) -> Vec<(String, String)> {
    vec![
        ("Employer Name".to_string(), employer.name.clone()),
        (number_label.to_string(), number.to_string()),
        ("Period".to_string(), period_label(month, provisional)),
    ]
}

/// Rounds a monetary amount to centavos for display, midpoint away from
/// zero. Calculators stay full-precision; rounding happens only at the row.
pub(crate) fn round_peso(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn identity(emp_id: &str) -> EmployeeIdentity {
        EmployeeIdentity {
            emp_id: emp_id.to_string(),
            last_name: "Santos".to_string(),
            first_name: "Maria".to_string(),
            middle_name: String::new(),
            sss_no: String::new(),
            tin_no: String::new(),
            pag_ibig_no: String::new(),
            philhealth_no: String::new(),
        }
    }

    fn record(emp_id: &str) -> EmployeeAggregateRecord {
        EmployeeAggregateRecord {
            emp_id: emp_id.to_string(),
            total_gross: dec("20000"),
            total_taxable: dec("19000"),
            total_tax_withheld: dec("500"),
        }
    }

    /// RC-001: unmatched records drop silently
    #[test]
    fn test_unmatched_records_drop() {
        let employees = vec![identity("emp_001"), identity("emp_003")];
        let records = vec![record("emp_001"), record("emp_002"), record("emp_003")];

        let joined = join_roster(&employees, &records);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].0.emp_id, "emp_001");
        assert_eq!(joined[1].0.emp_id, "emp_003");
    }

    /// RC-002: join preserves record order, not roster order
    #[test]
    fn test_join_preserves_record_order() {
        let employees = vec![identity("emp_002"), identity("emp_001")];
        let records = vec![record("emp_001"), record("emp_002")];

        let joined = join_roster(&employees, &records);

        assert_eq!(joined[0].0.emp_id, "emp_001");
        assert_eq!(joined[1].0.emp_id, "emp_002");
    }

    #[test]
    fn test_period_label_full_month() {
        let month = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(period_label(month, false), "January 2026");
    }

    #[test]
    fn test_period_label_provisional() {
        let month = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(period_label(month, true), "January 2026 (Provisional)");
    }

    #[test]
    fn test_round_peso_midpoint_away_from_zero() {
        assert_eq!(round_peso(dec("1.005")), dec("1.01"));
        assert_eq!(round_peso(dec("1.004")), dec("1.00"));
    }
}
