//! Loads the hook project settings from `.rpdk-config`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CfnHookError, Result};

pub const SETTINGS_FILENAME: &str = ".rpdk-config";

/// The subset of the project settings file this tool needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSettings {
    #[serde(rename = "typeName")]
    pub type_name: String,

    #[serde(rename = "artifact_type", default)]
    pub artifact_type: Option<String>,
}

impl ProjectSettings {
    /// Load settings from `.rpdk-config` in the current working directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd.join(SETTINGS_FILENAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|_| CfnHookError::InvalidProject {
                reason: format!(
                    "Project file {} not found. Have you initialized a hook project here?",
                    path.display()
                ),
            })?;
        let settings: Self =
            serde_json::from_str(&contents).map_err(|e| CfnHookError::InvalidProject {
                reason: format!("{}: {}", path.display(), e),
            })?;

        if let Some(artifact_type) = &settings.artifact_type {
            if artifact_type != "HOOK" {
                return Err(CfnHookError::InvalidProject {
                    reason: format!(
                        "project artifact type is {artifact_type}, expected HOOK"
                    ),
                });
            }
        }
        Ok(settings)
    }
}
