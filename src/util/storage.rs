//! Key-value persistence backends for browser-local state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SavedStore` talks to storage only through [`KeyValueStorage`], so the
//! browser `localStorage` binding and the in-memory map used by native tests
//! are interchangeable.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` looks up `window.localStorage` on every call instead of
//! caching the handle. `web_sys::Storage` is not `Send`, and Leptos context
//! values must be.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Failure raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled, or a native build).
    #[error("local storage is not available")]
    Unavailable,
    /// Reading `key` failed.
    #[error("failed to read storage key {key}: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed.
    #[error("failed to write storage key {key}: {reason}")]
    Write { key: String, reason: String },
    /// Deleting `key` failed.
    #[error("failed to remove storage key {key}: {reason}")]
    Remove { key: String, reason: String },
    /// Writing `key` would exceed the storage quota.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
}

/// Synchronous string key-value store scoped to one origin.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` backend. Only functional under the `csr` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StorageError::Unavailable),
    }
}

#[cfg(feature = "csr")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| {
                let reason = js_reason(&e);
                if reason.contains("QuotaExceeded") {
                    StorageError::QuotaExceeded { key: key.to_owned() }
                } else {
                    StorageError::Write { key: key.to_owned(), reason }
                }
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process backend with an optional byte quota.
///
/// The quota counts key and value bytes across all entries, roughly how
/// browsers account for `localStorage` usage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once total usage would exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self { items: Mutex::new(HashMap::new()), quota_bytes: Some(quota_bytes) }
    }

    /// Bytes currently held across all keys and values.
    pub fn used_bytes(&self) -> usize {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(quota) = self.quota_bytes {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_owned() });
            }
        }
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}
