//! Key-value storage seam.
//!
//! DESIGN
//! ======
//! The board persists everything as JSON strings under a handful of fixed
//! keys, the same shape a browser keeps in `localStorage`. Backends only
//! move strings; encoding lives in [`load_json`] / [`save_json`] so every
//! backend reads values written by any other.
//!
//! Backends are cheap `Clone` handles. The board, the admin gate and the
//! client identity each hold their own handle onto the same underlying store.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Feedback item list (JSON array).
pub const FEEDBACKS_KEY: &str = "reportvoice_feedbacks";
/// Vote record list (JSON array).
pub const VOTES_KEY: &str = "reportvoice_votes";
/// Per-client opaque user identifier (bare string, not JSON).
pub const USER_ID_KEY: &str = "reportvoice_user_id";
/// Admin session object (JSON object).
pub const ADMIN_SESSION_KEY: &str = "reportvoice_admin_session";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("storage i/o failed for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("stored value for {key} is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// TRAIT
// =============================================================================

/// String key-value store with `localStorage` semantics.
///
/// Reads of a missing key return `Ok(None)`. Removing a missing key succeeds.
pub trait Storage: Clone + Send + Sync + 'static {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys double as file names in [`FileStorage`], so keep them to a safe set.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid { Ok(()) } else { Err(StorageError::InvalidKey(key.to_owned())) }
}

// =============================================================================
// JSON HELPERS
// =============================================================================

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns an error if the backend read fails or the stored value does not
/// decode as `T`.
pub fn load_json<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Parse { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if encoding or the backend write fails.
pub fn save_json<S: Storage, T: Serialize + ?Sized>(storage: &S, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    storage.set_item(key, &raw)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
