//! Directory creation for the data tree.

use anyhow::{Context, Result};
use tijarah_settings::Directories;

/// Creates every directory of the data tree that does not exist yet.
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn ensure_directories(dirs: &Directories) -> Result<()> {
    for dir in dirs.all() {
        if dir.is_dir() {
            continue;
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        tracing::debug!("created {}", dir.display());
    }
    Ok(())
}
