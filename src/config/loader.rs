//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the employer
//! profile from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EmployerProfile;

/// Loads and provides access to the employer profile.
///
/// # Example
///
/// ```no_run
/// use contribution_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/employer.yaml").unwrap();
/// println!("Employer: {}", loader.employer().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    employer: EmployerProfile,
}

impl ConfigLoader {
    /// Loads the employer profile from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the profile file (e.g., "./config/employer.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if the file is
    /// missing (`ConfigNotFound`) or is not valid YAML for an
    /// [`EmployerProfile`] (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let employer =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { employer })
    }

    /// Returns the loaded employer profile.
    pub fn employer(&self) -> &EmployerProfile {
        &self.employer
    }
}
