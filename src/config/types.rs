//! Configuration types.

use serde::{Deserialize, Serialize};

/// The employer's registered identity, stamped into report headers.
///
/// Registration numbers are optional in the file and default to empty
/// strings, matching how absent employee numbers render in report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerProfile {
    /// The employer's registered business name.
    pub name: String,
    /// The employer's registered address.
    #[serde(default)]
    pub address: String,
    /// Employer SSS registration number.
    #[serde(default)]
    pub sss_no: String,
    /// Employer PhilHealth registration number.
    #[serde(default)]
    pub philhealth_no: String,
    /// Employer Pag-IBIG registration number.
    #[serde(default)]
    pub pag_ibig_no: String,
    /// Employer BIR Taxpayer Identification Number.
    #[serde(default)]
    pub tin_no: String,
}
