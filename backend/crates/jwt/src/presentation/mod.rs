//! Presentation Layer
//!
//! HTTP handlers and DTOs for the JWT refresh lesson.

pub mod dto;
pub mod handlers;
pub mod router;
