//! Default values shared by the settings provider and its consumers.
//!
//! The directory names and the database extension are fixed for this
//! version of the on-disk layout and cannot be overridden.

/// Display title of the application window.
pub const APP_TITLE: &str = "YosSoft Supplier, Inventory and Sales Accountant";
/// Semantic version of the application.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default window width in pixels.
pub const WINDOW_WIDTH: u32 = 1200;
/// Default window height in pixels.
pub const WINDOW_HEIGHT: u32 = 800;

/// Data directory name, relative to the installation root.
pub const DATA_DIR: &str = "data";
/// Database directory name, relative to the data directory.
pub const DATABASE_DIR: &str = "database";
/// Backup directory name, relative to the data directory.
pub const BACKUP_DIR: &str = "backups";
/// Log directory name, relative to the data directory.
pub const LOG_DIR: &str = "logs";

/// File extension of every entity database.
pub const DATABASE_EXTENSION: &str = "db";

/// Days between two scheduled backups.
pub const BACKUP_INTERVAL_DAYS: u32 = 7;
/// Number of backups kept before the oldest is discarded.
pub const MAX_BACKUPS: u32 = 10;

/// Log message template.
pub const LOG_FORMAT: &str = "{timestamp} - {target} - {level} - {message}";

/// Name of the optional overrides file in the installation root.
pub const SETTINGS_FILE: &str = "settings.toml";
