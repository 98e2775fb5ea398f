//! Domain Layer
//!
//! - `user_data` rows
//! - Repository trait
//! - Result rendering and attack detection

pub mod entities;
pub mod repository;
pub mod services;
