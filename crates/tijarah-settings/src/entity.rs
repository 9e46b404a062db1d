//! Business entities and the per-entity database path table.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::defaults::DATABASE_EXTENSION;
use crate::error::ParseError;

/// A business-data category backed by its own database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// Customer accounts.
    Customers,
    /// Supplier accounts.
    Suppliers,
    /// Inventory items.
    Products,
    /// Sales invoices.
    Sales,
    /// Purchase invoices.
    Purchases,
    /// Operating expenses.
    Expenses,
    /// Generated reports.
    Reports,
}

impl Entity {
    /// Every entity, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Customers,
        Self::Suppliers,
        Self::Products,
        Self::Sales,
        Self::Purchases,
        Self::Expenses,
        Self::Reports,
    ];

    /// Lowercase logical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Suppliers => "suppliers",
            Self::Products => "products",
            Self::Sales => "sales",
            Self::Purchases => "purchases",
            Self::Expenses => "expenses",
            Self::Reports => "reports",
        }
    }

    /// Database file name, e.g. `sales.db`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.{DATABASE_EXTENSION}", self.as_str())
    }

    const fn index(self) -> usize {
        match self {
            Self::Customers => 0,
            Self::Suppliers => 1,
            Self::Products => 2,
            Self::Sales => 3,
            Self::Purchases => 4,
            Self::Expenses => 5,
            Self::Reports => 6,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownEntity(String::from(s)))
    }
}

/// Database file of every entity, inside the database directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePaths {
    paths: [PathBuf; 7],
}

impl DatabasePaths {
    /// Builds `<database_dir>/<entity>.db` for every entity.
    #[must_use]
    pub fn new(database_dir: &Path) -> Self {
        Self {
            paths: Entity::ALL.map(|e| database_dir.join(e.file_name())),
        }
    }

    /// Path of the database file for `entity`.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // index() is bounded by Entity::ALL
    pub fn get(&self, entity: Entity) -> &Path {
        &self.paths[entity.index()]
    }

    /// `(entity, path)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &Path)> {
        Entity::ALL.into_iter().zip(self.paths.iter().map(PathBuf::as_path))
    }

    /// Number of entries; always `Entity::ALL.len()`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Serialize for DatabasePaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (entity, path) in self.iter() {
            map.serialize_entry(entity.as_str(), path)?;
        }
        map.end()
    }
}
