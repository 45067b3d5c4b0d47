//! Application configuration resolved at build time.
//!
//! A browser has no process environment, so values are captured with
//! `option_env!` when the WASM bundle is compiled and fall back to defaults.
//!
//! Recognized variables:
//! - `MOVIEBOX_TMDB_API_KEY`: catalog API key (empty disables catalog calls)
//! - `MOVIEBOX_TMDB_BASE_URL`: default `https://api.themoviedb.org/3`
//! - `MOVIEBOX_TMDB_IMAGE_BASE_URL`: default `https://image.tmdb.org/t/p/w500`
//! - `MOVIEBOX_TMDB_LANGUAGE`: default `en-US`
//! - `MOVIEBOX_SAVED_KEY`: localStorage key for saved movies, default `savedMovies`
//! - `MOVIEBOX_LOGIN_USERNAME` / `MOVIEBOX_LOGIN_PASSWORD`: demo login pair
//! - `MOVIEBOX_LOG_LEVEL`: `error`..`trace`, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";
pub const DEFAULT_SAVED_KEY: &str = "savedMovies";
pub const DEFAULT_LOGIN_USERNAME: &str = "admin";
pub const DEFAULT_LOGIN_PASSWORD: &str = "password123";

/// Catalog API connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
}

/// Demo login pair checked by the login page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub login: LoginConfig,
    pub saved_key: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "MOVIEBOX_TMDB_API_KEY" => option_env!("MOVIEBOX_TMDB_API_KEY"),
                "MOVIEBOX_TMDB_BASE_URL" => option_env!("MOVIEBOX_TMDB_BASE_URL"),
                "MOVIEBOX_TMDB_IMAGE_BASE_URL" => option_env!("MOVIEBOX_TMDB_IMAGE_BASE_URL"),
                "MOVIEBOX_TMDB_LANGUAGE" => option_env!("MOVIEBOX_TMDB_LANGUAGE"),
                "MOVIEBOX_SAVED_KEY" => option_env!("MOVIEBOX_SAVED_KEY"),
                "MOVIEBOX_LOGIN_USERNAME" => option_env!("MOVIEBOX_LOGIN_USERNAME"),
                "MOVIEBOX_LOGIN_PASSWORD" => option_env!("MOVIEBOX_LOGIN_PASSWORD"),
                "MOVIEBOX_LOG_LEVEL" => option_env!("MOVIEBOX_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let catalog = CatalogConfig {
            api_key: var("MOVIEBOX_TMDB_API_KEY", ""),
            base_url: var("MOVIEBOX_TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            image_base_url: var("MOVIEBOX_TMDB_IMAGE_BASE_URL", DEFAULT_TMDB_IMAGE_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            language: var("MOVIEBOX_TMDB_LANGUAGE", DEFAULT_TMDB_LANGUAGE),
        };
        let login = LoginConfig {
            username: var("MOVIEBOX_LOGIN_USERNAME", DEFAULT_LOGIN_USERNAME),
            password: var("MOVIEBOX_LOGIN_PASSWORD", DEFAULT_LOGIN_PASSWORD),
        };
        let log_level = log::Level::from_str(&var("MOVIEBOX_LOG_LEVEL", "info")).unwrap_or(log::Level::Info);

        Self { catalog, login, saved_key: var("MOVIEBOX_SAVED_KEY", DEFAULT_SAVED_KEY), log_level }
    }
}
