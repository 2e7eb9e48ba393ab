use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Journal settings, stored as `.worklog.toml` at the journal root.
///
/// Every field has a default so a missing or partial file always loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory under the journal root where attachment files live.
    #[serde(default = "default_attachments_dir")]
    pub attachments_dir: String,

    /// Work type applied when `add` is called without `--kind`.
    #[serde(default)]
    pub default_kind: Option<String>,

    /// How many distinct paths `worklog paths` shows.
    #[serde(default = "default_recent_paths_limit")]
    pub recent_paths_limit: usize,
}

fn default_attachments_dir() -> String {
    "attachments".to_string()
}

fn default_recent_paths_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attachments_dir: default_attachments_dir(),
            default_kind: None,
            recent_paths_limit: default_recent_paths_limit(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}
