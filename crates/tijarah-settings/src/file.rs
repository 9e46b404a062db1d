//! Optional TOML overrides file.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::defaults::SETTINGS_FILE;
use crate::locale::Language;
use crate::logging::{LogFormat, LogLevel};
use crate::root::RootLocation;
use crate::settings::Settings;

/// Scalar values that may be overridden per installation.
///
/// Every field is optional; unset fields fall back to the built-in
/// defaults. The directory layout and the entity table are fixed and
/// cannot be overridden.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// `[backup]` table.
    #[serde(default)]
    pub backup: BackupSection,
    /// `[logging]` table.
    #[serde(default)]
    pub logging: LoggingSection,
    /// `[window]` table.
    #[serde(default)]
    pub window: WindowSection,
    /// `[locale]` table.
    #[serde(default)]
    pub locale: LocaleSection,
}

/// Backup overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BackupSection {
    /// Days between backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<NonZeroU32>,
    /// Backups to retain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backups: Option<NonZeroU32>,
}

/// Logging overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Minimum severity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    /// Message template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<LogFormat>,
}

/// Window overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WindowSection {
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<NonZeroU32>,
    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<NonZeroU32>,
}

/// Locale overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocaleSection {
    /// Default UI language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<Language>,
}

impl SettingsFile {
    /// Captures every overridable value of `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            backup: BackupSection {
                interval_days: Some(settings.backup().interval_days),
                max_backups: Some(settings.backup().max_backups),
            },
            logging: LoggingSection {
                level: Some(settings.logging().level),
                format: Some(settings.logging().format.clone()),
            },
            window: WindowSection {
                width: Some(settings.app().window.width),
                height: Some(settings.app().window.height),
            },
            locale: LocaleSection {
                default_language: Some(settings.locale().default_language()),
            },
        }
    }

    /// Loads overrides from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!("loaded settings overrides from {}", path.display());
        Ok(file)
    }

    /// Saves overrides to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content =
            toml::to_string_pretty(self).context("failed to serialize settings to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Resolves the overrides file path: `{root}/settings.toml`.
#[must_use]
pub fn resolve_settings_path(root: &RootLocation) -> PathBuf {
    root.join(SETTINGS_FILE)
}
