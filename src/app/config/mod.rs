// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Image cache limits
//! - `[career]` - Submission endpoint and timeouts
//!
//! # Path Resolution
//!
//! 1. `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` flag or `LUMBINI_SITE_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lumbini_site::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Maximum number of decoded images kept.
    #[serde(
        default = "default_prefetch_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_cache_entries: Option<usize>,

    /// Memory budget of the cache in megabytes.
    #[serde(
        default = "default_prefetch_cache_mb",
        skip_serializing_if = "Option::is_none"
    )]
    pub prefetch_cache_mb: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            prefetch_cache_entries: default_prefetch_cache_entries(),
            prefetch_cache_mb: default_prefetch_cache_mb(),
        }
    }
}

impl GalleryConfig {
    /// Cache entry limit, clamped to the supported range.
    #[must_use]
    pub fn cache_entries(&self) -> usize {
        self.prefetch_cache_entries
            .unwrap_or(DEFAULT_PREFETCH_CACHE_ENTRIES)
            .clamp(MIN_PREFETCH_CACHE_ENTRIES, MAX_PREFETCH_CACHE_ENTRIES)
    }

    /// Cache memory budget in bytes, clamped to the supported range.
    #[must_use]
    pub fn cache_bytes(&self) -> usize {
        let mb = self
            .prefetch_cache_mb
            .unwrap_or(DEFAULT_PREFETCH_CACHE_MB)
            .clamp(MIN_PREFETCH_CACHE_MB, MAX_PREFETCH_CACHE_MB);
        mb as usize * 1024 * 1024
    }
}

/// Internship application delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerConfig {
    /// Multipart endpoint receiving applications. When unset, submissions are
    /// simulated locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// HTTP timeout in seconds.
    #[serde(
        default = "default_submission_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,

    /// Delay of the simulated submitter in milliseconds.
    #[serde(
        default = "default_simulated_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_delay_ms: Option<u64>,
}

impl Default for CareerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_submission_timeout_secs(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl CareerConfig {
    /// Trimmed endpoint, `None` when unset or blank.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .unwrap_or(DEFAULT_SUBMISSION_TIMEOUT_SECS)
                .clamp(MIN_SUBMISSION_TIMEOUT_SECS, MAX_SUBMISSION_TIMEOUT_SECS),
        )
    }

    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(
            self.simulated_delay_ms
                .unwrap_or(DEFAULT_SIMULATED_DELAY_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub career: CareerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_prefetch_cache_entries() -> Option<usize> {
    Some(DEFAULT_PREFETCH_CACHE_ENTRIES)
}

fn default_prefetch_cache_mb() -> Option<u32> {
    Some(DEFAULT_PREFETCH_CACHE_MB)
}

fn default_submission_timeout_secs() -> Option<u64> {
    Some(DEFAULT_SUBMISSION_TIMEOUT_SECS)
}

fn default_simulated_delay_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_DELAY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning)`. On failure the default config is returned with
/// the i18n key of a warning notification.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings file rejected, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                prefetch_cache_entries: Some(10),
                prefetch_cache_mb: Some(64),
            },
            career: CareerConfig {
                endpoint: Some("https://apply.example.com/internship".to_string()),
                timeout_secs: Some(12),
                simulated_delay_ms: Some(250),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[general]\ntheme_mode = \"sepia\"\n",
        )
        .expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_is_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[career]\nendpoint = \"https://x.test/apply\"\n").expect("write");

        let config = load_from_path(&path).expect("load");
        assert_eq!(config.career.endpoint(), Some("https://x.test/apply"));
        assert_eq!(config.career.simulated_delay(), Duration::from_millis(1000));
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn blank_endpoint_means_simulated() {
        let career = CareerConfig {
            endpoint: Some("   ".to_string()),
            ..CareerConfig::default()
        };
        assert!(career.endpoint().is_none());
    }

    #[test]
    fn limits_are_clamped() {
        let gallery = GalleryConfig {
            prefetch_cache_entries: Some(0),
            prefetch_cache_mb: Some(1_000_000),
        };
        assert_eq!(gallery.cache_entries(), MIN_PREFETCH_CACHE_ENTRIES);
        assert_eq!(
            gallery.cache_bytes(),
            MAX_PREFETCH_CACHE_MB as usize * 1024 * 1024
        );

        let career = CareerConfig {
            timeout_secs: Some(1),
            ..CareerConfig::default()
        };
        assert_eq!(
            career.timeout(),
            Duration::from_secs(MIN_SUBMISSION_TIMEOUT_SECS)
        );
    }
}
