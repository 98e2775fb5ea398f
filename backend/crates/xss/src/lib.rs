//! Cross-Site Scripting Mitigation Lesson
//!
//! - `domain/` - Review of a submitted sanitizer snippet
//! - `application/` - Grading use case
//! - `presentation/` - HTTP handlers
//!
//! The submission is never compiled or run. Markup is stripped and the
//! remaining text is searched for the required calls.

pub mod application;
pub mod domain;
pub mod presentation;

pub use domain::review::{SnippetReview, review_snippet};
pub use presentation::router::xss_router;

#[cfg(test)]
mod tests;
