//! Domain Layer
//!
//! - Access token claims
//! - Token signing and parsing (expired vs. invalid)
//! - Refresh token repository trait

pub mod claims;
pub mod repository;
pub mod services;
