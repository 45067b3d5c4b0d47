//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render movie cards and page chrome while reading/writing shared
//! state from Leptos context providers.

pub mod movie_card;
pub mod movie_section;
pub mod nav_bar;
pub mod notification_stack;
