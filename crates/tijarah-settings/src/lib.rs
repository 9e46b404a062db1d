//! Settings provider for the tijarah accounting application.
//!
//! Everything here is derived from a single installation root: the data
//! directory tree, one database file per business entity, and the scalar
//! defaults consumed by the backup job, the logger, the UI shell and the
//! localization layer. Building a [`Settings`] value performs no I/O.

/// Compile-time default values.
pub mod defaults;
mod directories;
/// Business entities and their database files.
pub mod entity;
mod error;
mod file;
/// Supported UI languages.
pub mod locale;
/// Log severity and message template.
pub mod logging;
mod root;
mod settings;

pub use directories::Directories;
pub use entity::{DatabasePaths, Entity};
pub use error::ParseError;
pub use file::{
    BackupSection, LocaleSection, LoggingSection, SettingsFile, WindowSection, resolve_settings_path,
};
pub use locale::Language;
pub use logging::{LogFormat, LogLevel, LogRecord};
pub use root::{ROOT_ENV, RootLocation};
pub use settings::{AppIdentity, BackupPolicy, LocaleSettings, LoggingSettings, Settings, WindowSize};
