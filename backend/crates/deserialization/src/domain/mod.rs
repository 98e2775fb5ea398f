//! Domain Layer
//!
//! - Lesson object types and their wire names
//! - Allow-list policy
//! - Registry of decodable types
//! - Object stream reader and writer

pub mod objects;
pub mod policy;
pub mod registry;
pub mod stream;
