//! # GlyphBanner Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Environment variables (`GLYPHBANNER_` prefix, `__` between sections)
//! 3. Config file (~/.config/glyphbanner/config.toml or `--config`)
//! 4. Defaults

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use glyphbanner_core::{DirectorySource, FontName, FontRegistry};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "GLYPHBANNER_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "glyphbanner", "GlyphBanner")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/glyphbanner"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Font resources
    pub fonts: FontsConfig,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Font used when a request names none
    pub default_font: FontName,
    /// Log level for the `glyphbanner` target
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_font: FontName::Standard,
            log_level: "info".to_string(),
        }
    }
}

/// Where fonts live and how they are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Directory holding `<font>.txt` resources
    pub directory: PathBuf,
    /// Keep parsed glyph tables for the life of the process
    pub cache: bool,
    /// Load every font at startup instead of on first use
    pub preload: bool,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("banners"),
            cache: true,
            preload: false,
        }
    }
}

impl FontsConfig {
    /// Build a registry reading from [`FontsConfig::directory`]
    pub fn registry(&self) -> FontRegistry {
        FontRegistry::new(DirectorySource::new(&self.directory), self.cache)
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Arc<RwLock<Config>>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from the default location, falling back to defaults
    pub fn new() -> anyhow::Result<Self> {
        let config_path = config_dir().join("config.toml");
        let config = Self::load_from_file(&config_path)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Load from an explicit file, which must exist
    pub fn from_path(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = path.into();
        if !config_path.exists() {
            anyhow::bail!("config file {} does not exist", config_path.display());
        }
        let config = Self::load_from_file(&config_path)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Load configuration from file, layering environment overrides on top.
    ///
    /// A missing file contributes nothing.
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        tracing::debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Get current configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Update configuration
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write();
        f(&mut config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config = self.config.read();
        let content = toml::to_string_pretty(&*config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)
            .with_context(|| format!("cannot write {}", self.config_path.display()))?;
        Ok(())
    }
}
