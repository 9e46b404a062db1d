//! Installation root resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variable naming the installation root.
pub const ROOT_ENV: &str = "TIJARAH_ROOT";

/// Absolute path of the application's installation directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RootLocation(PathBuf);

impl RootLocation {
    /// Wraps `path`, joining it onto the working directory when relative.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(absolutize(path.as_ref()))
    }

    /// Resolves the installation root.
    ///
    /// - If `explicit` is `Some`, uses it.
    /// - Otherwise uses `$TIJARAH_ROOT` when set and non-empty.
    /// - Otherwise falls back to the current working directory.
    ///
    /// Never fails: the last resort is the system temp directory.
    #[must_use]
    pub fn resolve(explicit: Option<&Path>) -> Self {
        resolve_from(explicit, std::env::var_os(ROOT_ENV))
    }

    /// Returns the root path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a path segment onto the root.
    #[must_use]
    pub fn join(&self, segment: impl AsRef<Path>) -> PathBuf {
        self.0.join(segment)
    }
}

impl AsRef<Path> for RootLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

fn resolve_from(explicit: Option<&Path>, env_value: Option<OsString>) -> RootLocation {
    if let Some(path) = explicit {
        tracing::debug!("installation root from argument: {}", path.display());
        return RootLocation::new(path);
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        tracing::debug!("installation root from {ROOT_ENV}: {}", path.display());
        return RootLocation::new(path);
    }

    let cwd = working_dir();
    tracing::debug!("installation root defaults to {}", cwd.display());
    RootLocation(cwd)
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir().join(path)
    }
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir())
}
