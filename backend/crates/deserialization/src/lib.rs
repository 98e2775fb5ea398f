//! Insecure Deserialization Lesson
//!
//! - `domain/` - Object types, allow-list policy, type registry, stream codec
//! - `application/` - Task grading use case
//! - `presentation/` - HTTP handlers
//!
//! ## Trust Model
//! - A type is reconstructed only if its exact name is on the policy's
//!   allow-list and the registry knows how to decode it
//! - The policy is checked before the body is touched
//! - Accepted tasks are graded, never run

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

pub use application::config::DeserializationConfig;
pub use domain::objects::{LessonObject, VulnerableTaskHolder};
pub use domain::policy::AllowListPolicy;
pub use domain::registry::TypeRegistry;
pub use domain::stream::{ObjectReader, ObjectWriter};
pub use error::{DeserializationError, DeserializationResult};
pub use presentation::router::deserialization_router;

#[cfg(test)]
mod tests;
