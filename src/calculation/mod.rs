//! Calculation logic for the Contribution Calculation Engine.
//!
//! This module contains the statutory contribution calculators (SSS,
//! PhilHealth, Pag-IBIG, BIR withholding tax) together with the shared
//! salary-credit bracket resolver and the provisional-period helpers.

mod pagibig;
mod philhealth;
mod provisional;
mod salary_credit;
mod sss;
mod withholding_tax;

pub use pagibig::{calculate_pagibig_contribution, pagibig_share_cap};
pub use philhealth::{
    calculate_philhealth_contribution, philhealth_premium_ceiling, philhealth_premium_floor,
};
pub use provisional::{monthly_equivalent, period_divisor};
pub use salary_credit::{monthly_salary_credit, msc_ceiling, msc_floor, round_to_credit_step};
pub use sss::calculate_sss_contribution;
pub use withholding_tax::calculate_withholding_tax;
