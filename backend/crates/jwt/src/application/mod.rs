//! Application Layer - Use Cases

pub mod checkout;
pub mod config;
pub mod login;
pub mod refresh;
