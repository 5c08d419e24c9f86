//! Organization context loading.
//!
//! The original application kept the "current organization" in a mutable
//! module-level cache. Here organization scope is an explicit value:
//! callers load an [`OrgContext`] once, pass it to whatever needs it, and
//! call [`OrgContext::refresh`] to obtain a fresh value when settings may
//! have changed — nothing mutates shared state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::OrganizationSettings;

/// An organization's loaded settings plus the path they came from.
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::OrgContext;
///
/// let context = OrgContext::load("./config/organization.yaml")?;
/// println!("Organization: {}", context.settings().name);
///
/// // After an admin edits the settings file:
/// let context = context.refresh()?;
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrgContext {
    settings: OrganizationSettings,
    source: PathBuf,
}

impl OrgContext {
    /// Loads organization settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file is missing and
    /// `ConfigParseError` if it is not valid YAML or lacks required
    /// fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self {
            settings,
            source: path.to_path_buf(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &OrganizationSettings {
        &self.settings
    }

    /// Re-reads the settings file and returns a fresh context.
    ///
    /// The existing context is left untouched; callers swap in the
    /// returned value where they need the new settings.
    pub fn refresh(&self) -> EngineResult<Self> {
        Self::load(&self.source)
    }
}
