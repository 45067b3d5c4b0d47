//! Saved-movie store: the single owner of the persisted saved list.
//!
//! DESIGN
//! ======
//! The whole collection lives as one JSON array under one storage key. Every
//! mutation reads the full array, edits it in memory, and writes it back in
//! full. There are no partial writes, so a failed write leaves the previous
//! blob untouched.
//!
//! ERROR HANDLING
//! ==============
//! Nothing escapes as an error. Reads fall back to an empty collection
//! (a corrupt blob is treated as no data), and mutations resolve to a
//! [`StoreOutcome`] carrying the user-facing message.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;

use super::notifications::NotificationKind;
use crate::net::types::MovieRecord;
use crate::util::storage::{KeyValueStorage, StorageError};

type Clock = Arc<dyn Fn() -> OffsetDateTime + Send + Sync>;

/// Result of a store mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOutcome {
    Saved,
    AlreadySaved,
    SaveFailed,
    Removed,
    NotFound,
    RemoveFailed,
    Cleared,
    ClearFailed,
}

impl StoreOutcome {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Saved | Self::Removed | Self::Cleared)
    }

    /// Message shown to the user for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Movie saved successfully!",
            Self::AlreadySaved => "Movie is already saved!",
            Self::SaveFailed => "Error saving movie. Please try again.",
            Self::Removed => "Movie removed from saved list!",
            Self::NotFound => "Movie not found in saved list!",
            Self::RemoveFailed => "Error removing movie. Please try again.",
            Self::Cleared => "All saved movies cleared!",
            Self::ClearFailed => "Error clearing saved movies.",
        }
    }

    /// Banner style used when reporting this outcome.
    pub fn kind(self) -> NotificationKind {
        if self.is_ok() { NotificationKind::Success } else { NotificationKind::Error }
    }
}

/// Handle to the persisted saved-movie collection.
///
/// Cloning is cheap and every clone writes to the same storage key.
#[derive(Clone)]
pub struct SavedStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    clock: Clock,
}

impl fmt::Debug for SavedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedStore").field("key", &self.key).finish_non_exhaustive()
    }
}

impl SavedStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), clock: Arc::new(OffsetDateTime::now_utc) }
    }

    /// Replace the time source used to stamp `savedAt`.
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> OffsetDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All saved movies in the order they were saved.
    ///
    /// A missing key, an unreadable backend, or a blob that does not parse all
    /// yield an empty list. Repeated ids keep their first occurrence.
    pub fn get_all(&self) -> Vec<MovieRecord> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("saved movies unreadable, treating as empty: {e}");
                return Vec::new();
            }
        };
        let movies: Vec<MovieRecord> = match serde_json::from_str(&raw) {
            Ok(movies) => movies,
            Err(e) => {
                log::debug!("saved movies blob under {} is corrupt, treating as empty: {e}", self.key);
                return Vec::new();
            }
        };

        let mut seen = HashSet::with_capacity(movies.len());
        movies.into_iter().filter(|m| seen.insert(m.id)).collect()
    }

    pub fn is_saved(&self, id: i64) -> bool {
        self.get_all().iter().any(|m| m.id == id)
    }

    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Append `movie` stamped with the current time, unless its id is already saved.
    ///
    /// Any `saved_at` on the input is ignored.
    pub fn save(&self, movie: &MovieRecord) -> StoreOutcome {
        let mut movies = self.get_all();
        if movies.iter().any(|m| m.id == movie.id) {
            return StoreOutcome::AlreadySaved;
        }
        if let Err(e) = movie.validate() {
            log::warn!("refusing to save movie {}: {e}", movie.id);
            return StoreOutcome::SaveFailed;
        }

        let mut record = movie.clone();
        record.saved_at = Some((self.clock)());
        movies.push(record);

        match self.write(&movies) {
            Ok(()) => {
                log::debug!("saved movie {} ({} total)", movie.id, movies.len());
                StoreOutcome::Saved
            }
            Err(e) => {
                log::warn!("error saving movie {}: {e}", movie.id);
                StoreOutcome::SaveFailed
            }
        }
    }

    /// Drop the movie with `id` from the saved list.
    pub fn remove(&self, id: i64) -> StoreOutcome {
        let movies = self.get_all();
        let before = movies.len();
        let remaining: Vec<MovieRecord> = movies.into_iter().filter(|m| m.id != id).collect();
        if remaining.len() == before {
            return StoreOutcome::NotFound;
        }

        match self.write(&remaining) {
            Ok(()) => {
                log::debug!("removed movie {id} ({} left)", remaining.len());
                StoreOutcome::Removed
            }
            Err(e) => {
                log::warn!("error removing movie {id}: {e}");
                StoreOutcome::RemoveFailed
            }
        }
    }

    /// Delete the persisted key entirely.
    pub fn clear(&self) -> StoreOutcome {
        match self.storage.remove_item(&self.key) {
            Ok(()) => StoreOutcome::Cleared,
            Err(e) => {
                log::warn!("error clearing saved movies: {e}");
                StoreOutcome::ClearFailed
            }
        }
    }

    fn write(&self, movies: &[MovieRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(movies).map_err(|e| StorageError::Write {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        self.storage.set_item(&self.key, &raw)
    }
}
