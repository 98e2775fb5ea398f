//! Application Layer

pub mod attack4;
