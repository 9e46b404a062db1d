//! The immutable settings value handed to every consumer.

use std::num::NonZeroU32;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::defaults;
use crate::directories::Directories;
use crate::entity::{DatabasePaths, Entity};
use crate::file::{SettingsFile, resolve_settings_path};
use crate::locale::Language;
use crate::logging::{LogFormat, LogLevel};
use crate::root::RootLocation;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Backup schedule and retention, consumed by the backup job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupPolicy {
    /// Days between two backups.
    pub interval_days: NonZeroU32,
    /// Backups kept before the oldest is discarded.
    pub max_backups: NonZeroU32,
}

impl BackupPolicy {
    /// Backup interval as a duration.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_days.get()) * SECONDS_PER_DAY)
    }
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self {
            interval_days: NonZeroU32::new(defaults::BACKUP_INTERVAL_DAYS).unwrap_or(NonZeroU32::MIN),
            max_backups: NonZeroU32::new(defaults::MAX_BACKUPS).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Log threshold and message template, consumed by the logger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoggingSettings {
    /// Minimum severity.
    pub level: LogLevel,
    /// Message template.
    pub format: LogFormat,
}

/// Default window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub width: NonZeroU32,
    /// Height in pixels.
    pub height: NonZeroU32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: NonZeroU32::new(defaults::WINDOW_WIDTH).unwrap_or(NonZeroU32::MIN),
            height: NonZeroU32::new(defaults::WINDOW_HEIGHT).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Application identity shown by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    /// Window title.
    pub title: &'static str,
    /// Semantic version.
    pub version: &'static str,
    /// Default window size.
    pub window: WindowSize,
}

impl AppIdentity {
    fn new(window: WindowSize) -> Self {
        Self {
            title: defaults::APP_TITLE,
            version: defaults::APP_VERSION,
            window,
        }
    }
}

/// Localization defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleSettings {
    default_language: Language,
    supported_languages: &'static [Language],
}

impl LocaleSettings {
    /// Uses `default_language` with the fixed supported set.
    #[must_use]
    pub const fn new(default_language: Language) -> Self {
        Self {
            default_language,
            supported_languages: &Language::ALL,
        }
    }

    /// Language selected when the user has not chosen one.
    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default_language
    }

    /// Every language the UI can display.
    #[must_use]
    pub const fn supported_languages(&self) -> &'static [Language] {
        self.supported_languages
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Every configuration value derived from one installation root.
///
/// Constructed once at startup and passed to consumers by reference or
/// behind an `Arc`; it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    root: RootLocation,
    directories: Directories,
    database_paths: DatabasePaths,
    backup: BackupPolicy,
    logging: LoggingSettings,
    app: AppIdentity,
    locale: LocaleSettings,
}

impl Settings {
    /// Builds settings for `root` with built-in defaults.
    #[must_use]
    pub fn from_root(root: RootLocation) -> Self {
        Self::with_overrides(root, &SettingsFile::default())
    }

    /// Builds settings for `root`, taking scalar values from `file` where set.
    #[must_use]
    pub fn with_overrides(root: RootLocation, file: &SettingsFile) -> Self {
        let directories = Directories::new(&root);
        let database_paths = DatabasePaths::new(directories.database());

        let default_backup = BackupPolicy::default();
        let backup = BackupPolicy {
            interval_days: file.backup.interval_days.unwrap_or(default_backup.interval_days),
            max_backups: file.backup.max_backups.unwrap_or(default_backup.max_backups),
        };

        let logging = LoggingSettings {
            level: file.logging.level.unwrap_or_default(),
            format: file.logging.format.clone().unwrap_or_default(),
        };

        let default_window = WindowSize::default();
        let window = WindowSize {
            width: file.window.width.unwrap_or(default_window.width),
            height: file.window.height.unwrap_or(default_window.height),
        };

        let locale = LocaleSettings::new(file.locale.default_language.unwrap_or_default());

        Self {
            root,
            directories,
            database_paths,
            backup,
            logging,
            app: AppIdentity::new(window),
            locale,
        }
    }

    /// Reads the overrides file and builds settings for `root`.
    ///
    /// `config_path` defaults to `<root>/settings.toml`. A missing file
    /// yields the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or holds an invalid value.
    pub fn load(root: RootLocation, config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.map_or_else(|| resolve_settings_path(&root), Path::to_path_buf);
        let file = SettingsFile::load(&path)?;
        Ok(Self::with_overrides(root, &file))
    }

    /// Installation root.
    #[must_use]
    pub const fn root(&self) -> &RootLocation {
        &self.root
    }

    /// Data directory tree.
    #[must_use]
    pub const fn directories(&self) -> &Directories {
        &self.directories
    }

    /// Per-entity database files.
    #[must_use]
    pub const fn database_paths(&self) -> &DatabasePaths {
        &self.database_paths
    }

    /// Shorthand for `database_paths().get(entity)`.
    #[must_use]
    pub fn database_path(&self, entity: Entity) -> &Path {
        self.database_paths.get(entity)
    }

    /// Backup schedule.
    #[must_use]
    pub const fn backup(&self) -> &BackupPolicy {
        &self.backup
    }

    /// Logger configuration.
    #[must_use]
    pub const fn logging(&self) -> &LoggingSettings {
        &self.logging
    }

    /// Application identity.
    #[must_use]
    pub const fn app(&self) -> &AppIdentity {
        &self.app
    }

    /// Localization defaults.
    #[must_use]
    pub const fn locale(&self) -> &LocaleSettings {
        &self.locale
    }
}
