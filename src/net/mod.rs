//! Networking modules for the movie catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! `catalog` handles TMDB REST calls and `types` defines the movie record
//! schema shared with saved-movie storage.

pub mod catalog;
pub mod types;
