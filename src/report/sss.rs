//! SSS contribution report builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::calculate_sss_contribution;
use crate::config::EmployerProfile;
use crate::models::{EmployeeAggregateRecord, EmployeeIdentity, ReportColumn, ReportTable};

use super::common::{join_roster, round_peso, scheme_header};

/// One row of the SSS contribution report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SssReportRow {
    /// 1-based row number, assigned after unmatched records are filtered.
    pub no: u32,
    /// The employee's SSS number (empty when not on file).
    pub sss_no: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's middle name.
    pub middle_name: String,
    /// The employee share, rounded to centavos.
    pub employee_share: Decimal,
    /// The employer share, rounded to centavos.
    pub employer_share: Decimal,
    /// The combined remittance (sum of the rounded shares).
    pub total: Decimal,
}

fn columns() -> Vec<ReportColumn> {
    vec![
        ReportColumn::permanent("no", "No."),
        ReportColumn::permanent("sss_no", "SSS No."),
        ReportColumn::permanent("last_name", "Last Name"),
        ReportColumn::permanent("first_name", "First Name"),
        ReportColumn::permanent("middle_name", "Middle Name"),
        ReportColumn::permanent("employee_share", "EE Share"),
        ReportColumn::permanent("employer_share", "ER Share"),
        ReportColumn::permanent("total", "Total"),
    ]
}

/// Builds the SSS contribution report for one calendar month.
///
/// Each aggregate record is matched against the roster by employee ID;
/// unmatched records are dropped silently. Surviving rows keep the input
/// record order and are renumbered from 1. The SSS calculator runs on each
/// record's gross earnings with the given provisional flag.
///
/// # Arguments
///
/// * `employees` - The employee roster
/// * `records` - Aggregated payroll figures, one per employee
/// * `month` - Any date within the reported calendar month
/// * `provisional` - Whether only one semi-monthly run exists for the month
/// * `employer` - The employer profile stamped into the header
pub fn generate_sss_report(
    employees: &[EmployeeIdentity],
    records: &[EmployeeAggregateRecord],
    month: NaiveDate,
    provisional: bool,
    employer: &EmployerProfile,
) -> ReportTable<SssReportRow> {
    let rows = join_roster(employees, records)
        .into_iter()
        .enumerate()
        .map(|(i, (record, identity))| {
            let contribution = calculate_sss_contribution(record.total_gross, provisional);
            let employee_share = round_peso(contribution.employee_share);
            let employer_share = round_peso(contribution.employer_share);

            SssReportRow {
                no: (i + 1) as u32,
                sss_no: identity.sss_no.clone(),
                last_name: identity.last_name.clone(),
                first_name: identity.first_name.clone(),
                middle_name: identity.middle_name.clone(),
                employee_share,
                employer_share,
                total: employee_share + employer_share,
            }
        })
        .collect();

    ReportTable::new(
        "SSS Contribution Report".to_string(),
        scheme_header(
            employer,
            "Employer SSS No.",
            &employer.sss_no,
            month,
            provisional,
        ),
        columns(),
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employer() -> EmployerProfile {
        EmployerProfile {
            name: "Acme Corp".to_string(),
            address: "123 Rizal Ave, Manila".to_string(),
            sss_no: "03-9876543-2".to_string(),
            philhealth_no: String::new(),
            pag_ibig_no: String::new(),
            tin_no: String::new(),
        }
    }

    fn identity(emp_id: &str, last_name: &str, sss_no: &str) -> EmployeeIdentity {
        EmployeeIdentity {
            emp_id: emp_id.to_string(),
            last_name: last_name.to_string(),
            first_name: "Test".to_string(),
            middle_name: String::new(),
            sss_no: sss_no.to_string(),
            tin_no: String::new(),
            pag_ibig_no: String::new(),
            philhealth_no: String::new(),
        }
    }

    fn record(emp_id: &str, gross: &str) -> EmployeeAggregateRecord {
        EmployeeAggregateRecord {
            emp_id: emp_id.to_string(),
            total_gross: dec(gross),
            total_taxable: dec(gross),
            total_tax_withheld: Decimal::ZERO,
        }
    }

    fn month() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    /// SR-001: unmatched records are dropped and rows renumbered
    #[test]
    fn test_unmatched_records_dropped_and_renumbered() {
        let employees = vec![
            identity("emp_001", "Santos", "34-1111111-1"),
            identity("emp_003", "Reyes", "34-3333333-3"),
        ];
        let records = vec![
            record("emp_001", "20000"),
            record("emp_002", "25000"),
            record("emp_003", "30000"),
        ];

        let table = generate_sss_report(&employees, &records, month(), false, &employer());

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].no, 1);
        assert_eq!(table.rows[1].no, 2);
        assert_eq!(table.rows[0].last_name, "Santos");
        assert_eq!(table.rows[1].last_name, "Reyes");
    }

    /// SR-002: calculator output lands in the row
    #[test]
    fn test_contribution_amounts_in_row() {
        let employees = vec![identity("emp_001", "Santos", "34-1111111-1")];
        let records = vec![record("emp_001", "12250")];

        let table = generate_sss_report(&employees, &records, month(), false, &employer());

        // MSC ties up to 12500.
        assert_eq!(table.rows[0].employee_share, dec("562.50"));
        assert_eq!(table.rows[0].employer_share, dec("1187.50"));
        assert_eq!(table.rows[0].total, dec("1750.00"));
    }

    /// SR-003: header carries employer identity and period
    #[test]
    fn test_header_contents() {
        let table = generate_sss_report(&[], &[], month(), false, &employer());

        assert_eq!(table.title, "SSS Contribution Report");
        assert_eq!(
            table.header_data,
            vec![
                ("Employer Name".to_string(), "Acme Corp".to_string()),
                ("Employer SSS No.".to_string(), "03-9876543-2".to_string()),
                ("Period".to_string(), "January 2026".to_string()),
            ]
        );
    }

    /// SR-004: provisional flag reaches both calculator and header
    #[test]
    fn test_provisional_flag_propagates() {
        let employees = vec![identity("emp_001", "Santos", "34-1111111-1")];
        let records = vec![record("emp_001", "10000")];

        let table = generate_sss_report(&employees, &records, month(), true, &employer());

        // 10000 doubles to MSC 20000; shares halve back to the period.
        assert_eq!(table.rows[0].employee_share, dec("450.00"));
        assert_eq!(
            table.header_data[2].1,
            "January 2026 (Provisional)".to_string()
        );
    }

    #[test]
    fn test_all_columns_permanent_and_read_only() {
        let table = generate_sss_report(&[], &[], month(), false, &employer());

        assert_eq!(table.columns.len(), 8);
        assert!(table.columns.iter().all(|c| c.is_permanent && !c.editable));
    }

    #[test]
    fn test_row_serializes_keyed_by_column_keys() {
        let employees = vec![identity("emp_001", "Santos", "34-1111111-1")];
        let records = vec![record("emp_001", "20000")];

        let table = generate_sss_report(&employees, &records, month(), false, &employer());
        let json = serde_json::to_value(&table.rows[0]).unwrap();

        for column in &table.columns {
            assert!(
                json.get(&column.key).is_some(),
                "row missing key {}",
                column.key
            );
        }
    }
}
