//! BIR withholding tax report builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::calculate_withholding_tax;
use crate::config::EmployerProfile;
use crate::models::{EmployeeAggregateRecord, EmployeeIdentity, ReportColumn, ReportTable};

use super::common::{join_roster, round_peso, scheme_header};

/// One row of the withholding tax report.
///
/// `tax_withheld` is what payroll actually deducted over the month's
/// processed runs; `tax_due` is the bracket table applied to the taxable
/// compensation. Finance reconciles the two downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithholdingTaxReportRow {
    /// 1-based row number, assigned after unmatched records are filtered.
    pub no: u32,
    /// The employee's TIN (empty when not on file).
    pub tin_no: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's middle name.
    pub middle_name: String,
    /// Gross compensation for the month's processed runs.
    pub gross_compensation: Decimal,
    /// Taxable compensation for the month's processed runs.
    pub taxable_compensation: Decimal,
    /// Tax per the semi-monthly bracket table on the taxable amount.
    pub tax_due: Decimal,
    /// Tax actually withheld by payroll.
    pub tax_withheld: Decimal,
}

fn columns() -> Vec<ReportColumn> {
    vec![
        ReportColumn::permanent("no", "No."),
        ReportColumn::permanent("tin_no", "TIN"),
        ReportColumn::permanent("last_name", "Last Name"),
        ReportColumn::permanent("first_name", "First Name"),
        ReportColumn::permanent("middle_name", "Middle Name"),
        ReportColumn::permanent("gross_compensation", "Gross Compensation"),
        ReportColumn::permanent("taxable_compensation", "Taxable Compensation"),
        ReportColumn::permanent("tax_due", "Tax Due"),
        ReportColumn::permanent("tax_withheld", "Tax Withheld"),
    ]
}

/// Builds the withholding tax report for one calendar month.
///
/// Join, filtering, and numbering behave exactly as in
/// [`generate_sss_report`](super::generate_sss_report). The bracket table
/// has no provisional mode; the flag only annotates the period label.
pub fn generate_withholding_tax_report(
    employees: &[EmployeeIdentity],
    records: &[EmployeeAggregateRecord],
    month: NaiveDate,
    provisional: bool,
    employer: &EmployerProfile,
) -> ReportTable<WithholdingTaxReportRow> {
    let rows = join_roster(employees, records)
        .into_iter()
        .enumerate()
        .map(|(i, (record, identity))| WithholdingTaxReportRow {
            no: (i + 1) as u32,
            tin_no: identity.tin_no.clone(),
            last_name: identity.last_name.clone(),
            first_name: identity.first_name.clone(),
            middle_name: identity.middle_name.clone(),
            gross_compensation: round_peso(record.total_gross),
            taxable_compensation: round_peso(record.total_taxable),
            tax_due: round_peso(calculate_withholding_tax(record.total_taxable)),
            tax_withheld: round_peso(record.total_tax_withheld),
        })
        .collect();

    ReportTable::new(
        "Withholding Tax Report".to_string(),
        scheme_header(
            employer,
            "Employer TIN",
            &employer.tin_no,
            month,
            provisional,
        ),
        columns(),
        rows,
    )
}
