//! Raw event data
//!
//! Events arrive from the host as a name plus a bag of keyed values. Typed
//! wrappers in [`super::typed`] read their fields through the getters here,
//! which fall back to a default when a key is missing or has another type.

use std::collections::HashMap;

/// A single event field value
#[derive(Debug, Clone, PartialEq)]
pub enum EventValue {
    Bool(bool),
    UInt64(u64),
    String(String),
}

/// A host event: name plus keyed fields
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    name: String,
    fields: HashMap<String, EventValue>,
}

impl RawEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.fields.get(key) {
            Some(EventValue::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn get_uint64(&self, key: &str, default: u64) -> u64 {
        match self.fields.get(key) {
            Some(EventValue::UInt64(v)) => *v,
            _ => default,
        }
    }

    /// String field, `None` when absent
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(EventValue::String(v)) => Some(v.clone()),
            _ => None,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, key: &str, value: EventValue) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }
}
