use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{RenderOptions, DEFAULT_TITLE};

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Document title for generated pages.
    /// Default: "Zoom Chat Log"
    pub title: Option<String>,
    /// Render thread accordions expanded.
    /// Default: false
    pub expand_threads: Option<bool>,
}

impl Config {
    /// Load configuration from ~/.config/zoomlog/config.toml
    ///
    /// - File missing: returns default config (Ok)
    /// - File exists but invalid TOML: returns Err so caller can show warning
    /// - Field missing: uses the built-in default
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, with the same rules as `load`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Build render options, letting explicit CLI values win over the file.
    /// - Blank or missing title → "Zoom Chat Log"
    pub fn render_options(&self, title: Option<&str>, expand_threads: bool) -> RenderOptions {
        let title = title
            .or(self.title.as_deref())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE);

        RenderOptions {
            title: title.to_string(),
            expand_threads: expand_threads || self.expand_threads.unwrap_or(false),
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(".config").join("zoomlog").join("config.toml"))
    }
}
