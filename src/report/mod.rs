//! Report builders for the Contribution Calculation Engine.
//!
//! One builder per statutory scheme: each joins roster identities against
//! aggregated payroll records, runs the scheme's calculator, and shapes the
//! result into a [`ReportTable`](crate::models::ReportTable) for the
//! external presentation/export layer.

mod common;
mod pagibig;
mod philhealth;
mod sss;
mod withholding_tax;

pub use pagibig::{PagibigReportRow, generate_pagibig_report};
pub use philhealth::{PhilhealthReportRow, generate_philhealth_report};
pub use sss::{SssReportRow, generate_sss_report};
pub use withholding_tax::{WithholdingTaxReportRow, generate_withholding_tax_report};
