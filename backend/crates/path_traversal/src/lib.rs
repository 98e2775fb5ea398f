//! Path Traversal Lesson
//!
//! Profile picture upload and download under `home/PathTraversal/<user>`.
//!
//! - `domain/` - Image store trait
//! - `application/` - Upload and picture use cases
//! - `infra/` - Local filesystem store
//! - `presentation/` - HTTP handlers
//!
//! Every path built from request data is checked with
//! [`platform::path_guard`] before it is touched.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::PathTraversalConfig;
pub use error::{PathTraversalError, PathTraversalResult};
pub use infra::filesystem::FsProfileImageStore;
pub use presentation::router::{path_traversal_router, path_traversal_router_generic};
