//! Movie record schema shared by the catalog API and saved-movie storage.
//!
//! The field names follow TMDB (`poster_path`, `vote_average`, ...), so the
//! same type decodes catalog responses and the persisted saved list. Unknown
//! catalog fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Year shown when a record carries no release date.
pub const UNKNOWN_YEAR: &str = "N/A";

/// A single movie as listed by the catalog or stored in the saved list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub vote_average: f64,
    /// Set by `SavedStore` when the record is persisted.
    #[serde(
        rename = "savedAt",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub saved_at: Option<OffsetDateTime>,
}

/// One page of catalog results (`/movie/popular`, `/search/movie`, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieRecord>,
}

/// Why a record is not fit for persistence.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("movie title is empty")]
    EmptyTitle,
    #[error("vote average {0} is outside 0..=10")]
    RatingOutOfRange(f64),
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl MovieRecord {
    /// Check the display contract: non-blank title, finite rating in `0..=10`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.title.trim().is_empty() {
            return Err(RecordError::EmptyTitle);
        }
        if !self.vote_average.is_finite() || !(0.0..=10.0).contains(&self.vote_average) {
            return Err(RecordError::RatingOutOfRange(self.vote_average));
        }
        Ok(())
    }

    /// Release year, taken as the text before the first `-` of the release date.
    pub fn year(&self) -> &str {
        match self.release_date.as_deref() {
            Some(date) if !date.is_empty() => date.split('-').next().unwrap_or(date),
            _ => UNKNOWN_YEAR,
        }
    }

    /// Rating rounded to one decimal, e.g. `7.4`.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Overview text, empty when absent.
    pub fn overview_text(&self) -> &str {
        self.overview.as_deref().unwrap_or_default()
    }

    /// Poster path when present and non-empty.
    pub fn poster(&self) -> Option<&str> {
        self.poster_path.as_deref().filter(|p| !p.is_empty())
    }
}
