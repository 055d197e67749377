//! Statutory Contribution Calculation Engine for Philippine Payroll
//!
//! This crate computes government-mandated payroll contributions (SSS,
//! PhilHealth, Pag-IBIG) and BIR withholding tax from aggregated monthly
//! payroll figures, and shapes the results into report-ready tables.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
