//! Prefecture quiz web service.
//!
//! Serves a single-page quiz asking the user to identify a Japanese
//! prefecture. The interesting part is [`quiz::generate`], which draws four
//! distinct names from a [`pool::NamePool`] and picks one as the correct
//! answer; the rest is axum routing and static file plumbing.

pub mod http;
pub mod pool;
pub mod quiz;

pub use http::{AppState, router};
pub use pool::{LoadError, NamePool};
pub use quiz::{CHOICE_COUNT, InsufficientData, QuizPayload, generate, generate_with};
