//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates card rendering
//! to `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod saved;
