//! UI Components
//!
//! Reusable Leptos components.

mod language_bar;
mod status_line;

pub use language_bar::LanguageBar;
pub use status_line::StatusLine;
