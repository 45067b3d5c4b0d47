//! TMDB catalog client for the popular, top-rated, and search listings.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`CatalogError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! The catalog is treated as unreliable. Callers get a `Result` and render
//! failures inline; nothing here panics or touches the saved-movie store.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::types::MovieRecord;
use crate::config::CatalogConfig;

/// Image shown for records without a poster path.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Failure fetching or decoding a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog API key is not configured")]
    MissingApiKey,
    #[error("catalog request failed: {0}")]
    Request(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
    #[error("catalog is only reachable from the browser")]
    Unavailable,
}

/// Which catalog listing to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Popular,
    TopRated,
}

impl Listing {
    #[cfg(any(test, feature = "csr"))]
    fn path(self) -> &'static str {
        match self {
            Self::Popular => "/movie/popular",
            Self::TopRated => "/movie/top_rated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogClient {
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Full poster URL for `movie`, or the placeholder image when it has none.
    pub fn poster_url(&self, movie: &MovieRecord) -> String {
        match movie.poster() {
            Some(path) => format!("{}{path}", self.config.image_base_url),
            None => PLACEHOLDER_POSTER_URL.to_owned(),
        }
    }

    #[cfg(any(test, feature = "csr"))]
    fn listing_endpoint(&self, listing: Listing) -> String {
        format!("{}{}", self.config.base_url, listing.path())
    }

    #[cfg(any(test, feature = "csr"))]
    fn search_endpoint(&self) -> String {
        format!("{}/search/movie", self.config.base_url)
    }

    /// Query parameters sent with every request, plus `extra`.
    #[cfg(any(test, feature = "csr"))]
    fn query_params<'a>(&'a self, extra: &[(&'a str, &'a str)]) -> Result<Vec<(&'a str, &'a str)>, CatalogError> {
        if self.config.api_key.is_empty() {
            return Err(CatalogError::MissingApiKey);
        }
        let mut params = vec![
            ("api_key", self.config.api_key.as_str()),
            ("language", self.config.language.as_str()),
        ];
        params.extend_from_slice(extra);
        params.push(("page", "1"));
        Ok(params)
    }

    /// Fetch the first page of popular movies.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request cannot be made, fails, or does not decode.
    pub async fn popular(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.listing(Listing::Popular).await
    }

    /// Fetch the first page of top-rated movies.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request cannot be made, fails, or does not decode.
    pub async fn top_rated(&self) -> Result<Vec<MovieRecord>, CatalogError> {
        self.listing(Listing::TopRated).await
    }

    async fn listing(&self, listing: Listing) -> Result<Vec<MovieRecord>, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let params = self.query_params(&[])?;
            fetch_page(&self.listing_endpoint(listing), params).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = listing;
            Err(CatalogError::Unavailable)
        }
    }

    /// Search movies by title.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request cannot be made, fails, or does not decode.
    pub async fn search(&self, query: &str) -> Result<Vec<MovieRecord>, CatalogError> {
        #[cfg(feature = "csr")]
        {
            let params = self.query_params(&[("query", query), ("include_adult", "false")])?;
            fetch_page(&self.search_endpoint(), params).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            Err(CatalogError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch_page(url: &str, params: Vec<(&str, &str)>) -> Result<Vec<MovieRecord>, CatalogError> {
    log::debug!("catalog GET {url}");
    let resp = gloo_net::http::Request::get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }
    let page: super::types::CatalogPage = resp.json().await.map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(page.results)
}
