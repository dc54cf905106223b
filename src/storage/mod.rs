//! Persisted local key-value storage
//!
//! Holds the profile backend bearer token and the recipe-of-the-day entry.
//! SQLite-backed on disk, with an in-memory variant for tests and
//! `--ephemeral` runs.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Key holding the profile backend bearer token
pub const TOKEN_KEY: &str = "token";

/// Key holding the persisted `{recipe, date}` pair
pub const DAILY_RECIPE_KEY: &str = "recipe_of_the_day";

pub type Result<T> = std::result::Result<T, StorageError>;

/// String key to string value storage.
///
/// Implementations must be safe to share across tasks; callers hold them as
/// `Arc<dyn KeyValueStore>`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Returns whether it was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

impl dyn KeyValueStore {
    /// Read and decode a JSON value.
    ///
    /// A value that no longer decodes (written by an older version) is
    /// reported as absent rather than an error.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("Ignoring undecodable stored value for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Encode a value as JSON and store it.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}
