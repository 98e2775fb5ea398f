//! Allow-List Policy
//!
//! A policy is an explicit value handed to the reader. Matching is exact
//! string equality on the full type name; there is no prefix or wildcard
//! form.

use std::collections::BTreeSet;

use super::objects::{DATE_TYPE, INTEGER_TYPE, STRING_TYPE, TASK_HOLDER_TYPE};

/// Set of type names that may be reconstructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListPolicy {
    allowed: BTreeSet<String>,
}

impl AllowListPolicy {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Task holder plus boxed integers
    pub fn task_holder() -> Self {
        Self::new([TASK_HOLDER_TYPE, INTEGER_TYPE])
    }

    /// Task holder plus strings and dates
    pub fn safe() -> Self {
        Self::new([TASK_HOLDER_TYPE, STRING_TYPE, DATE_TYPE])
    }

    pub fn permits(&self, type_name: &str) -> bool {
        self.allowed.contains(type_name)
    }

    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

impl Default for AllowListPolicy {
    fn default() -> Self {
        Self::task_holder()
    }
}
