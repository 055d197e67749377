//! Configuration for the Contribution Calculation Engine.
//!
//! Report headers carry the employer's registered identity; this module
//! loads that profile from a YAML file.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::EmployerProfile;
