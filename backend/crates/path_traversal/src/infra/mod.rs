//! Infrastructure Layer - Storage implementations

pub mod filesystem;
