//! PhilHealth premium report builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::calculate_philhealth_contribution;
use crate::config::EmployerProfile;
use crate::models::{EmployeeAggregateRecord, EmployeeIdentity, ReportColumn, ReportTable};

use super::common::{join_roster, round_peso, scheme_header};

/// One row of the PhilHealth premium report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhilhealthReportRow {
    /// 1-based row number, assigned after unmatched records are filtered.
    pub no: u32,
    /// The employee's PhilHealth number (empty when not on file).
    pub philhealth_no: String,
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
        ReportColumn::permanent("philhealth_no", "PhilHealth No."),
        ReportColumn::permanent("last_name", "Last Name"),
        ReportColumn::permanent("first_name", "First Name"),
        ReportColumn::permanent("middle_name", "Middle Name"),
        ReportColumn::permanent("employee_share", "EE Share"),
        ReportColumn::permanent("employer_share", "ER Share"),
        ReportColumn::permanent("total", "Total"),
    ]
}

/// Builds the PhilHealth premium report for one calendar month.
///
/// Join, filtering, and numbering behave exactly as in
/// [`generate_sss_report`](super::generate_sss_report); the PhilHealth
/// calculator runs on each record's gross earnings.
pub fn generate_philhealth_report(
    employees: &[EmployeeIdentity],
    records: &[EmployeeAggregateRecord],
    month: NaiveDate,
    provisional: bool,
    employer: &EmployerProfile,
) -> ReportTable<PhilhealthReportRow> {
    let rows = join_roster(employees, records)
        .into_iter()
        .enumerate()
        .map(|(i, (record, identity))| {
            let contribution = calculate_philhealth_contribution(record.total_gross, provisional);
            let employee_share = round_peso(contribution.employee_share);
            let employer_share = round_peso(contribution.employer_share);

            PhilhealthReportRow {
                no: (i + 1) as u32,
                philhealth_no: identity.philhealth_no.clone(),
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
        "PhilHealth Premium Report".to_string(),
        scheme_header(
            employer,
            "Employer PhilHealth No.",
            &employer.philhealth_no,
            month,
            provisional,
        ),
        columns(),
        rows,
    )
}
