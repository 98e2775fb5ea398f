//! SQL Injection Lessons (parameterized)
//!
//! - `domain/` - `user_data` rows, repository trait, table rendering
//! - `application/` - Lesson 5b and advanced lesson 6a
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers
//!
//! Queries are fixed strings; request values are always bound as
//! parameters. The query echoed back to the student is display text only.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{SqlInjectionError, SqlInjectionResult};
pub use infra::memory::InMemoryUserDataRepository;
pub use infra::postgres::PgUserDataRepository;
pub use presentation::router::{sql_injection_router, sql_injection_router_generic};
