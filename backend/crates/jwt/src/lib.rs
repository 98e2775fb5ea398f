//! JWT Refresh Lesson
//!
//! Clean Architecture structure:
//! - `domain/` - Claims, token service, repository traits
//! - `application/` - Use cases (login, refresh exchange, checkout)
//! - `infra/` - In-memory refresh token set
//! - `presentation/` - HTTP handlers
//!
//! ## Token Model
//! - Access tokens are HS512 JWTs signed with one shared secret
//! - Refresh tokens are opaque random strings, valid while they are
//!   members of the server-side set
//! - An exchange removes the presented refresh token atomically, so two
//!   concurrent exchanges of the same token yield exactly one new pair
//! - The exchange accepts an expired access token to learn the subject

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::JwtConfig;
pub use domain::services::{JwtTokenService, TokenParse};
pub use error::{JwtError, JwtResult};
pub use infra::memory::InMemoryRefreshTokenStore;
pub use presentation::router::{jwt_router, jwt_router_generic};

#[cfg(test)]
mod tests;
