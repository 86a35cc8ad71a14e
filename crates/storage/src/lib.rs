//! `glowcart-storage`: durable client-side list slots.
//!
//! A [`ListStore`] is a plain key → string slot store (the browser's local
//! storage, a directory of files, a map in memory). Typed lists are written
//! through [`save_list`] as a versioned JSON envelope and read back through
//! [`load_list`], which never fails: a missing, corrupt or unsupported payload
//! reads as an empty list.

pub mod envelope;
pub mod file;
pub mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use envelope::{CURRENT_VERSION, DecodeError, Envelope};
pub use file::{FileStore, default_data_dir};
pub use memory::MemoryStore;

/// Slot holding the shopping cart.
pub const CART_KEY: &str = "cart";

/// Slot holding the compare list.
pub const COMPARE_KEY: &str = "compareList";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Slot keys double as file names, so they are restricted to a safe alphabet.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backing store refused the write (full, read-only, detached).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("failed to encode list payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw key-value slot storage.
///
/// Implementations store strings; encoding is handled by [`save_list`] and
/// [`load_list`].
pub trait ListStore: Send + Sync + core::fmt::Debug {
    /// Read the raw payload under `key`. `Ok(None)` when the slot is empty.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the payload under `key`.
    fn write(&self, key: &str, payload: &str) -> StoreResult<()>;

    /// Remove the slot entirely. Removing an empty slot is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

impl<S: ListStore + ?Sized> ListStore for Arc<S> {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> StoreResult<()> {
        (**self).write(key, payload)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// Load the list stored under `key`.
///
/// Never fails: unreadable slots and undecodable payloads are logged and
/// treated as empty.
pub fn load_list<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: ListStore + ?Sized,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read list slot; starting empty");
            return Vec::new();
        }
    };

    match envelope::decode(&raw) {
        Ok(envelope) => {
            tracing::debug!(key, version = envelope.version, items = envelope.items.len(), "loaded list slot");
            envelope.items
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable list payload");
            Vec::new()
        }
    }
}

/// Persist `items` under `key` as a current-version envelope.
pub fn save_list<T, S>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: ListStore + ?Sized,
{
    let payload = envelope::encode(items)?;
    store.write(key, &payload)
}

pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
