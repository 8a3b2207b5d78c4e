//! ID-or-object reference fields.
//!
//! Several resource fields (an agent's voice, a number's telephony account
//! connection) arrive either as a bare identifier string or as the fully
//! expanded resource object. `Reference` captures both forms as a sum type.

use serde::Deserialize;
use serde::Serialize;
use serde::de;
use serde::de::DeserializeOwned;

/// A reference to a resource, either by bare identifier or fully expanded.
#[derive(Debug, Clone, PartialEq)]
pub enum Reference<T> {
    /// The identifier of an already-existing resource.
    Id(String),
    /// The fully expanded resource.
    Full(Box<T>),
}

impl<T> Reference<T> {
    /// Create a bare-identifier reference.
    pub fn id(id: impl Into<String>) -> Self {
        Reference::Id(id.into())
    }

    /// Create a fully expanded reference.
    pub fn full(resource: T) -> Self {
        Reference::Full(Box::new(resource))
    }

    /// The bare identifier, if this is an identifier-only reference.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Reference::Id(id) => Some(id),
            Reference::Full(_) => None,
        }
    }

    /// The expanded resource, if present.
    pub fn as_full(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Full(resource) => Some(resource),
        }
    }
}

impl<T: Serialize> Serialize for Reference<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Reference::Id(id) => serializer.serialize_str(id),
            Reference::Full(resource) => resource.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Reference<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // The bare-string interpretation is tried before any full-object
        // decode; a string scalar never reaches the inner type.
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(id) => Ok(Reference::Id(id)),
            other => T::deserialize(other)
                .map(|resource| Reference::Full(Box::new(resource)))
                .map_err(de::Error::custom),
        }
    }
}
