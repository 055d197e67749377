//! Pag-IBIG contribution report builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::calculate_pagibig_contribution;
use crate::config::EmployerProfile;
use crate::models::{EmployeeAggregateRecord, EmployeeIdentity, ReportColumn, ReportTable};

use super::common::{join_roster, round_peso, scheme_header};

/// One row of the Pag-IBIG contribution report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagibigReportRow {
    /// 1-based row number, assigned after unmatched records are filtered.
    pub no: u32,
    /// The employee's Pag-IBIG membership number (empty when not on file).
    pub pag_ibig_no: String,
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
        ReportColumn::permanent("pag_ibig_no", "Pag-IBIG No."),
        ReportColumn::permanent("last_name", "Last Name"),
        ReportColumn::permanent("first_name", "First Name"),
        ReportColumn::permanent("middle_name", "Middle Name"),
        ReportColumn::permanent("employee_share", "EE Share"),
        ReportColumn::permanent("employer_share", "ER Share"),
        ReportColumn::permanent("total", "Total"),
    ]
}

/// Builds the Pag-IBIG contribution report for one calendar month.
///
/// Join, filtering, and numbering behave exactly as in
/// [`generate_sss_report`](super::generate_sss_report); the Pag-IBIG
/// calculator runs on each record's gross earnings.
pub fn generate_pagibig_report(
    employees: &[EmployeeIdentity],
    records: &[EmployeeAggregateRecord],
    month: NaiveDate,
    provisional: bool,
    employer: &EmployerProfile,
) -> ReportTable<PagibigReportRow> {
    let rows = join_roster(employees, records)
        .into_iter()
        .enumerate()
        .map(|(i, (record, identity))| {
            let contribution = calculate_pagibig_contribution(record.total_gross, provisional);
            let employee_share = round_peso(contribution.employee_share);
            let employer_share = round_peso(contribution.employer_share);

            PagibigReportRow {
                no: (i + 1) as u32,
                pag_ibig_no: identity.pag_ibig_no.clone(),
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
        "Pag-IBIG Contribution Report".to_string(),
        scheme_header(
            employer,
            "Employer Pag-IBIG No.",
            &employer.pag_ibig_no,
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
            address: String::new(),
            sss_no: String::new(),
            philhealth_no: String::new(),
            pag_ibig_no: "2070-1234-5678".to_string(),
            tin_no: String::new(),
        }
    }

    fn identity(emp_id: &str) -> EmployeeIdentity {
        EmployeeIdentity {
            emp_id: emp_id.to_string(),
            last_name: "Reyes".to_string(),
            first_name: "Jose".to_string(),
            middle_name: "P".to_string(),
            sss_no: String::new(),
            tin_no: String::new(),
            pag_ibig_no: "1211-5678-9012".to_string(),
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
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    /// GR-001: capped shares flow into the row
    #[test]
    fn test_capped_shares_in_row() {
        let employees = vec![identity("emp_001")];
        let records = vec![record("emp_001", "20000")];

        let table = generate_pagibig_report(&employees, &records, month(), false, &employer());

        assert_eq!(table.rows[0].employee_share, dec("100.00"));
        assert_eq!(table.rows[0].employer_share, dec("100.00"));
        assert_eq!(table.rows[0].total, dec("200.00"));
    }

    /// GR-002: header uses the Pag-IBIG registration number
    #[test]
    fn test_header_uses_pagibig_number() {
        let table = generate_pagibig_report(&[], &[], month(), false, &employer());

        assert_eq!(table.title, "Pag-IBIG Contribution Report");
        assert_eq!(table.header_data[1].0, "Employer Pag-IBIG No.");
        assert_eq!(table.header_data[1].1, "2070-1234-5678");
    }

    #[test]
    fn test_identity_fields_copied() {
        let employees = vec![identity("emp_001")];
        let records = vec![record("emp_001", "5000")];

        let table = generate_pagibig_report(&employees, &records, month(), false, &employer());

        assert_eq!(table.rows[0].pag_ibig_no, "1211-5678-9012");
        assert_eq!(table.rows[0].last_name, "Reyes");
        assert_eq!(table.rows[0].middle_name, "P");
    }
}
