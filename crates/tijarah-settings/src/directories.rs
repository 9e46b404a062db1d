//! Data directory tree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::defaults::{BACKUP_DIR, DATA_DIR, DATABASE_DIR, LOG_DIR};
use crate::root::RootLocation;

/// Directories derived from the installation root.
///
/// Nothing is created on disk; the first consumer that needs a directory
/// is responsible for creating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directories {
    data: PathBuf,
    database: PathBuf,
    backup: PathBuf,
    log: PathBuf,
}

impl Directories {
    /// Derives the directory set from `root`.
    #[must_use]
    pub fn new(root: &RootLocation) -> Self {
        let data = root.join(DATA_DIR);
        Self {
            database: data.join(DATABASE_DIR),
            backup: data.join(BACKUP_DIR),
            log: data.join(LOG_DIR),
            data,
        }
    }

    /// `<root>/data`
    #[must_use]
    pub fn data(&self) -> &Path {
        &self.data
    }

    /// `<root>/data/database`
    #[must_use]
    pub fn database(&self) -> &Path {
        &self.database
    }

    /// `<root>/data/backups`
    #[must_use]
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// `<root>/data/logs`
    #[must_use]
    pub fn log(&self) -> &Path {
        &self.log
    }

    /// All directories, parents before children.
    #[must_use]
    pub fn all(&self) -> [&Path; 4] {
        [&self.data, &self.database, &self.backup, &self.log]
    }
}
