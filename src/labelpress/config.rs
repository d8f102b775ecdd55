use crate::error::{LabelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "labelpress.json";
const DEFAULT_CATALOG: &str = "labelData.csv";
const DEFAULT_TEMPLATE_ROOT: &str = "templates";
const DEFAULT_OUTPUT: &str = "labels.pdf";

/// Configuration for labelpress, stored in labelpress.json next to the
/// catalog. Command-line flags override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelpressConfig {
    /// Path of the catalog table.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Root directory the background template ids resolve under.
    #[serde(default = "default_template_root")]
    pub template_root: PathBuf,

    /// Fixed name of the exported document.
    #[serde(default = "default_output")]
    pub output: String,

    /// Scale factor for single-label previews.
    #[serde(default = "default_preview_scale")]
    pub preview_scale: u32,
}

fn default_catalog() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG)
}

fn default_template_root() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_ROOT)
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_preview_scale() -> u32 {
    1
}

impl Default for LabelpressConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            template_root: default_template_root(),
            output: default_output(),
            preview_scale: default_preview_scale(),
        }
    }
}

impl LabelpressConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LabelError::Io)?;
        let config: LabelpressConfig = serde_json::from_str(&content)
            .map_err(|e| LabelError::Api(format!("Invalid {}: {}", CONFIG_FILENAME, e)))?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LabelError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Api(format!("Could not serialize config: {}", e)))?;
        fs::write(config_path, content).map_err(LabelError::Io)?;
        Ok(())
    }
}
