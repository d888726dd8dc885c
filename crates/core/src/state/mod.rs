pub mod db;
pub mod io;
pub mod preferences;
pub mod storage;

pub use db::PathfinderDb;

pub use preferences::ThemePreference;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
