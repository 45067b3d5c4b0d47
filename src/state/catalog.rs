//! What a catalog-backed section shows once its fetch settles.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::catalog::CatalogError;
use crate::net::types::MovieRecord;

/// Cards shown in the popular and top-rated shelves.
pub const SHELF_LIMIT: usize = 8;
/// Cards shown for a search.
pub const SEARCH_LIMIT: usize = 12;

/// Settled content of a catalog section.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionFeed {
    Movies(Vec<MovieRecord>),
    /// Inline message shown in place of cards.
    Message(String),
}

/// Turn a fetch result into section content.
///
/// `subject` names the listing in messages, e.g. `"popular movies"`.
pub fn section_feed(result: Result<Vec<MovieRecord>, CatalogError>, limit: usize, subject: &str) -> SectionFeed {
    match result {
        Ok(mut movies) if !movies.is_empty() => {
            movies.truncate(limit);
            SectionFeed::Movies(movies)
        }
        Ok(_) => SectionFeed::Message(format!("Unable to load {subject}")),
        Err(e) => {
            log::warn!("error loading {subject}: {e}");
            SectionFeed::Message(format!("Error loading {subject}"))
        }
    }
}
