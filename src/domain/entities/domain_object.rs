//! Domain objects loaded from the data layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key of a domain object.
///
/// Backends hand out both numeric and string identifiers, so either form is
/// accepted. Two ids are equal only if both kind and content match
/// (`1` and `"1"` are different objects).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Int(id) => write!(f, "{}", id),
            ObjectId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        ObjectId::Int(id)
    }
}

impl From<i32> for ObjectId {
    fn from(id: i32) -> Self {
        ObjectId::Int(i64::from(id))
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        ObjectId::Str(id.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        ObjectId::Str(id)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = std::convert::Infallible;

    /// Parses `"42"` as a numeric id and anything else as a string id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(id) => ObjectId::Int(id),
            Err(_) => ObjectId::Str(trimmed.to_string()),
        })
    }
}

/// A fully hydrated entity as served by the data layer.
///
/// Only `id` and `name` matter to the dropdown. Everything else is kept in
/// `attributes` so that objects survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainObject {
    pub id: ObjectId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl DomainObject {
    pub fn new(id: impl Into<ObjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            attributes: serde_json::Map::new(),
        }
    }

    /// Builder-style helper for attaching an extra attribute.
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }
}
