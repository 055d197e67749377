//! Employee identity model.
//!
//! This module defines [`EmployeeIdentity`], the roster-sourced record that
//! report builders join against aggregated payroll figures.

use serde::{Deserialize, Serialize};

/// Identity fields for one employee on the roster.
///
/// Government registration numbers are optional in the roster; absent values
/// deserialize to empty strings and render as empty cells in report rows,
/// never as null.
///
/// # Example
///
/// ```
/// use contribution_engine::models::EmployeeIdentity;
///
/// let json = r#"{
///     "emp_id": "emp_001",
///     "last_name": "Santos",
///     "first_name": "Maria",
///     "middle_name": "Cruz",
///     "sss_no": "34-1234567-8"
/// }"#;
/// let identity: EmployeeIdentity = serde_json::from_str(json).unwrap();
/// assert_eq!(identity.sss_no, "34-1234567-8");
/// assert_eq!(identity.tin_no, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdentity {
    /// Unique identifier for the employee, matching payroll records.
    pub emp_id: String,
    /// The employee's last name.
    #[serde(default)]
    pub last_name: String,
    /// The employee's first name.
    #[serde(default)]
    pub first_name: String,
    /// The employee's middle name.
    #[serde(default)]
    pub middle_name: String,
    /// Social Security System number.
    #[serde(default)]
    pub sss_no: String,
    /// BIR Taxpayer Identification Number.
    #[serde(default)]
    pub tin_no: String,
    /// Pag-IBIG (HDMF) membership number.
    #[serde(default)]
    pub pag_ibig_no: String,
    /// PhilHealth identification number.
    #[serde(default)]
    pub philhealth_no: String,
}
