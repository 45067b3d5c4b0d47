//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `saved` owns persistence, `save_sync` binds
//! cards to it, and the rest model page chrome so individual components can
//! depend on small focused models.

pub mod catalog;
pub mod notifications;
pub mod save_sync;
pub mod saved;
pub mod search;
pub mod ui;
