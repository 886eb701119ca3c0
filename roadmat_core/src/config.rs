//! # Settings
//!
//! User settings read from a TOML file. Every key is optional.
//!
//! ```toml
//! policy = "strict"          # or "lenient" (default)
//! catalog = "materials.json" # replaces the built-in catalog
//! top = 3                    # rows to display, 0 = all
//! format = "json"            # or "table" (default)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::errors::{CalcError, CalcResult};
use crate::params::ParameterPolicy;

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "roadmat.toml";

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: ParameterPolicy,

    /// JSON catalog to use instead of the built-in one
    pub catalog: Option<PathBuf>,

    /// Number of recommendations to display (0 = all)
    pub top: usize,

    pub format: OutputFormat,
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig { policy: self.policy }
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        toml::from_str(text).map_err(|e| CalcError::serialization(format!("Invalid settings TOML: {}", e)))
    }
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let settings = Settings::from_toml_str(&contents)?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Load settings if the file exists, otherwise fall back to defaults.
pub fn load_settings_or_default(path: &Path) -> CalcResult<Settings> {
    if path.exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}
