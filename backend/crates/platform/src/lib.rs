//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the lessons:
//! - Cryptographic utilities (secure random bytes, Base64, constant-time compare)
//! - Request header helpers (bearer tokens, current lesson user)
//! - Canonical path containment for file operations
//! - HTML helpers (escaping, tag stripping)

pub mod crypto;
pub mod header;
pub mod html;
pub mod path_guard;
