//! Prism configuration file (`.prism/config.yml`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".prism/config.yml";

fn default_templates_path() -> PathBuf {
    PathBuf::from(".prism")
}

fn default_output_path() -> PathBuf {
    PathBuf::from(".")
}

/// Generation settings and reserved identifiers
///
/// Only the reserved word lists are consulted while rendering a template; the
/// remaining fields drive the `generate` workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Project to fetch from the design API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Directory scanned for `*.prism` templates
    #[serde(default = "default_templates_path")]
    pub templates_path: PathBuf,

    /// Directory generated files are written to
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Words no color identity may derive to
    #[serde(default)]
    pub reserved_colors: Vec<String>,

    /// Words no text style identity may derive to
    #[serde(default, alias = "reserved_text_styles")]
    pub reserved_textstyles: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            project_id: None,
            templates_path: default_templates_path(),
            output_path: default_output_path(),
            reserved_colors: Vec::new(),
            reserved_textstyles: Vec::new(),
        }
    }
}

impl Configuration {
    /// Configuration carrying only reserved identifiers
    pub fn with_reserved(
        reserved_colors: impl IntoIterator<Item = impl Into<String>>,
        reserved_textstyles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            reserved_colors: reserved_colors.into_iter().map(Into::into).collect(),
            reserved_textstyles: reserved_textstyles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file is a valid, all-default configuration
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse configuration")
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Like [`Configuration::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the configuration as YAML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
