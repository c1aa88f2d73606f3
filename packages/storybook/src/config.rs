//! Storybook configuration loaded from `storybook.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// How a story is placed on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Centered,
    Padded,
    Fullscreen,
}

impl Layout {
    pub fn classes(self) -> &'static str {
        match self {
            Layout::Centered => "flex min-h-screen items-center justify-center",
            Layout::Padded => "p-4",
            Layout::Fullscreen => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown on the index page and in page titles
    pub title: String,
    /// Where `build` writes pages
    pub out_dir: PathBuf,
    pub layout: Layout,
    /// Stylesheet linked from every page (e.g. a compiled Tailwind bundle)
    pub stylesheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "UI Kit".to_string(),
            out_dir: PathBuf::from("storybook-static"),
            layout: Layout::Centered,
            stylesheet: None,
        }
    }
}

impl Config {
    /// Default config file path.
    ///
    /// Can be overridden with the `UI_KIT_STORYBOOK_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("UI_KIT_STORYBOOK_CONFIG") {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ui-kit/storybook.toml"))
            .unwrap_or_else(|| PathBuf::from("storybook.toml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, or from [`Config::default_path`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()),
        }
    }
}
