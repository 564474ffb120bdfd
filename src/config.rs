//! Configuration management for todocards
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, EXIT_ANIMATION_DEFAULT_FRAMES, EXIT_ANIMATION_MAX_FRAMES, EXIT_ANIMATION_MIN_FRAMES,
};
use crate::icons::IconTheme;
use crate::session::factory::SUPPORTED_PROVIDERS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub identity: IdentityConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (click the add button, click outside the panel to dismiss)
    pub mouse_enabled: bool,
    /// Focus the title field as soon as the add panel opens
    pub autofocus_input: bool,
    /// Initial state of the "Enter multiple" switch
    pub enter_multiple_default: bool,
    /// Number of ticks the add panel's close animation lasts
    pub exit_animation_frames: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Format used for creation/completion dates
    pub date_format: String,
    /// Show dates on todo cards
    pub show_dates: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

/// Identity provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Provider type (e.g., "memory")
    pub provider: String,
    /// Provider-specific credentials as a JSON string
    pub credentials: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            autofocus_input: true,
            enter_multiple_default: false,
            exit_animation_frames: EXIT_ANIMATION_DEFAULT_FRAMES,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
            show_dates: false,
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            credentials: r#"{"accounts":[]}"#.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        log::info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todocards.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("todocards").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let frames = self.ui.exit_animation_frames;
        if !(EXIT_ANIMATION_MIN_FRAMES..=EXIT_ANIMATION_MAX_FRAMES).contains(&frames) {
            anyhow::bail!(
                "exit_animation_frames must be between {} and {}, got {}",
                EXIT_ANIMATION_MIN_FRAMES,
                EXIT_ANIMATION_MAX_FRAMES,
                frames
            );
        }

        if chrono::format::StrftimeItems::new(&self.display.date_format)
            .any(|item| matches!(item, chrono::format::Item::Error))
        {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        self.validate_identity()?;

        Ok(())
    }

    /// Validate the identity provider section
    fn validate_identity(&self) -> Result<()> {
        if !SUPPORTED_PROVIDERS.contains(&self.identity.provider.as_str()) {
            anyhow::bail!(
                "unsupported identity provider '{}'. Available providers: {}",
                self.identity.provider,
                SUPPORTED_PROVIDERS.join(", ")
            );
        }

        if !self.identity.credentials.trim().is_empty() {
            serde_json::from_str::<serde_json::Value>(&self.identity.credentials)
                .context("identity.credentials is not valid JSON")?;
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todocards Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todocards"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
