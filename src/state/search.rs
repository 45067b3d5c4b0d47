//! Search box flow: query validation and how a finished search settles.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use super::catalog::SEARCH_LIMIT;
use super::notifications::NotificationKind;
use crate::net::catalog::CatalogError;
use crate::net::types::MovieRecord;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a movie title to search";
pub const SEARCH_FAILED_MESSAGE: &str = "Error searching movies. Please try again.";
pub const SEARCHING_MESSAGE: &str = "Searching...";

/// Search results currently replacing the popular shelf.
///
/// `generation` counts submits and resets. A search task captures the value
/// [`SearchState::begin`] returns, and its settlement only lands while that
/// value is still current.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: Option<String>,
    pub results: Vec<MovieRecord>,
    pub pending: bool,
    generation: u64,
}

impl SearchState {
    /// Heading shown above results, e.g. `Search Results for "alien"`.
    pub fn heading(&self) -> Option<String> {
        self.query.as_ref().map(|q| format!("Search Results for \"{q}\""))
    }

    pub fn is_active(&self) -> bool {
        self.query.is_some()
    }

    /// Inline line shown in place of the shelf while a search is in flight.
    pub fn loading_line(&self) -> Option<&'static str> {
        self.pending.then_some(SEARCHING_MESSAGE)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark a new search in flight and return its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// Go back to the popular shelf. Any search still in flight becomes stale.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.clear();
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Apply the settlement of the search started as `generation`.
    ///
    /// Returns the notification to raise, if any. A stale settlement changes
    /// nothing and raises nothing.
    pub fn apply(&mut self, generation: u64, settlement: SearchSettlement) -> Option<(String, NotificationKind)> {
        if !self.is_current(generation) {
            log::debug!("dropping stale search settlement {generation} (current {})", self.generation);
            return None;
        }
        match settlement {
            SearchSettlement::Show { query, results } => {
                self.query = Some(query);
                self.results = results;
                self.pending = false;
                None
            }
            SearchSettlement::Restore { message, kind } => {
                self.clear();
                Some((message, kind))
            }
        }
    }

    fn clear(&mut self) {
        self.query = None;
        self.results.clear();
        self.pending = false;
    }
}

/// How to proceed after the catalog answers a search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchSettlement {
    /// Show these results in place of the popular shelf.
    Show { query: String, results: Vec<MovieRecord> },
    /// Go back to the popular shelf and tell the user why.
    Restore { message: String, kind: NotificationKind },
}

/// Trim the raw input; a blank query is rejected with the prompt message.
///
/// # Errors
///
/// Returns [`EMPTY_QUERY_MESSAGE`] when the input is blank.
pub fn validate_query(raw: &str) -> Result<String, &'static str> {
    let query = raw.trim();
    if query.is_empty() { Err(EMPTY_QUERY_MESSAGE) } else { Ok(query.to_owned()) }
}

pub fn settle(query: String, result: Result<Vec<MovieRecord>, CatalogError>) -> SearchSettlement {
    match result {
        Ok(mut results) if !results.is_empty() => {
            results.truncate(SEARCH_LIMIT);
            SearchSettlement::Show { query, results }
        }
        Ok(_) => SearchSettlement::Restore {
            message: format!("No movies found for \"{query}\""),
            kind: NotificationKind::Info,
        },
        Err(e) => {
            log::warn!("error searching movies for {query:?}: {e}");
            SearchSettlement::Restore { message: SEARCH_FAILED_MESSAGE.to_owned(), kind: NotificationKind::Error }
        }
    }
}
