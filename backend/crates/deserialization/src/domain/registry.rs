//! Type Registry
//!
//! The types this process knows how to decode. A type must be both
//! permitted by the policy and present here to be reconstructed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use super::objects::{
    DATE_TYPE, INTEGER_TYPE, LessonObject, STRING_TYPE, TASK_HOLDER_TYPE, VulnerableTaskHolder,
};
use crate::error::{DeserializationError, DeserializationResult};

/// Decodes a JSON body into a lesson object
pub type Decoder = fn(&[u8]) -> serde_json::Result<LessonObject>;

/// Known types by wire name
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    decoders: HashMap<String, Decoder>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every lesson object type
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(TASK_HOLDER_TYPE, |body| {
            decode::<VulnerableTaskHolder>(body).map(LessonObject::TaskHolder)
        });
        registry.register(INTEGER_TYPE, |body| decode::<i32>(body).map(LessonObject::Integer));
        registry.register(STRING_TYPE, |body| decode::<String>(body).map(LessonObject::Text));
        registry.register(DATE_TYPE, |body| {
            decode::<DateTime<Utc>>(body).map(LessonObject::Date)
        });
        registry
    }

    pub fn register(&mut self, type_name: impl Into<String>, decoder: Decoder) {
        self.decoders.insert(type_name.into(), decoder);
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// Look up the decoder for `type_name`
    pub fn decoder(&self, type_name: &str) -> DeserializationResult<Decoder> {
        self.decoders
            .get(type_name)
            .copied()
            .ok_or_else(|| DeserializationError::TypeNotFound {
                type_name: type_name.to_string(),
            })
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}
