//! Core data models for the Contribution Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contribution;
mod employee;
mod payroll;
mod report;

pub use contribution::ContributionResult;
pub use employee::EmployeeIdentity;
pub use payroll::EmployeeAggregateRecord;
pub use report::{ReportColumn, ReportTable};
