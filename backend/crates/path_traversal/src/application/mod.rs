//! Application Layer - Use Cases

pub mod config;
pub mod profile_picture;
pub mod upload_profile;

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "ProfileUpload";

/// Lesson directory under the home directory
pub const LESSON_DIRECTORY: &str = "PathTraversal";
