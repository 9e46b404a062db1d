//! Database connection management.

use anyhow::{Context, Result};
use rusqlite::Connection;
use tijarah_settings::{Entity, Settings};

/// Opens (or creates) the database file of `entity`.
///
/// The database directory is created first if missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database
/// cannot be opened.
pub fn open_entity_db(settings: &Settings, entity: Entity) -> Result<Connection> {
    let db_path = settings.database_path(entity);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open {entity} database {}", db_path.display()))?;

    conn.pragma_update(None, "foreign_keys", true)
        .with_context(|| format!("failed to enable foreign keys on {entity} database"))?;

    tracing::debug!("opened {entity} database at {}", db_path.display());
    Ok(conn)
}

/// Opens every entity database, in [`Entity::ALL`] order.
///
/// # Errors
///
/// Returns an error on the first database that cannot be opened.
pub fn open_all(settings: &Settings) -> Result<Vec<(Entity, Connection)>> {
    Entity::ALL
        .into_iter()
        .map(|entity| open_entity_db(settings, entity).map(|conn| (entity, conn)))
        .collect()
}
