//! Application Layer - Use Cases

pub mod assignment5b;
pub mod attack6a;

/// Separator between lesson output and the echoed query
pub(crate) const YOUR_QUERY_WAS: &str = "<br> Your query was: ";
