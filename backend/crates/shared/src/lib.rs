//! Shared Kernel - Lesson-crossing minimal core
//!
//! This crate contains the vocabulary every lesson crate speaks:
//! - Common error types and result aliases
//! - The attack result convention returned by lesson endpoints
//!
//! **Design Principle**: Only include things that mean the same thing
//! in every lesson.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod attack_result;

pub use attack_result::{AttackResult, AttackResultBuilder};
