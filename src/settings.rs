//! Persisted author-identity settings.
//!
//! This module handles loading and saving the few profile fields that
//! survive across sessions, in TOML format with platform-specific directory
//! resolution. Values are plain strings with no schema versioning; the file
//! is loaded once at startup and written through on every change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted identity fields.
///
/// # File Location
///
/// - Linux: `~/.config/PostPeek/settings.toml`
/// - macOS: `~/Library/Application Support/PostPeek/settings.toml`
/// - Windows: `%APPDATA%\PostPeek\settings.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Author display name override.
    #[serde(default)]
    pub author_name: String,
    /// Author headline override.
    #[serde(default)]
    pub author_headline: String,
    /// Whether the override identity is active.
    #[serde(default)]
    pub use_profile_override: bool,
    /// Custom profile photo reference.
    #[serde(default)]
    pub custom_photo: Option<PathBuf>,
}

impl Settings {
    /// Creates settings with default (empty) values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the settings file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::settings_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PostPeek");

        Ok(config_dir)
    }

    /// Gets the full path to the settings file.
    pub fn settings_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    /// Loads settings from the settings file.
    ///
    /// If the file doesn't exist, returns default settings.
    pub fn load() -> Result<Self> {
        let settings_path = Self::settings_file_path()?;

        if !settings_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&settings_path).context(format!(
            "Failed to read settings file: {}",
            settings_path.display()
        ))?;

        let settings: Self = toml::from_str(&content).context(format!(
            "Failed to parse settings file: {}",
            settings_path.display()
        ))?;

        Ok(settings)
    }

    /// Saves settings to the settings file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;

        let settings_path = Self::settings_file_path()?;
        let temp_path = settings_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp settings file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &settings_path).context(format!(
            "Failed to rename temp settings file to: {}",
            settings_path.display()
        ))?;

        Ok(())
    }

    /// Sets the custom photo reference, clearing it for `None`.
    pub fn set_custom_photo(&mut self, photo: Option<PathBuf>) {
        self.custom_photo = photo;
    }
}
