//! Domain Layer

pub mod review;
