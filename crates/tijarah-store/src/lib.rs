//! Storage consumer of the settings provider.
//!
//! Creates the data directory tree on first use and opens one `SQLite`
//! file per business entity at the path the settings supply.

mod connection;
mod layout;

pub use connection::{open_all, open_entity_db};
pub use layout::ensure_directories;
