//! Domain Layer
//!
//! Profile image storage interface.

pub mod repository;
