//! Catalog keys classifying reference entities and task kinds.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the external entity a task is attached to, such as
/// `ORDER` or `SHIPMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceType(String);

impl ReferenceType {
    /// Creates a validated reference type.
    ///
    /// Input is trimmed and upper-cased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedReferenceType`] when the key is
    /// empty, does not start with a letter, or contains characters outside
    /// `[A-Z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        normalize_key(&raw)
            .map(Self)
            .ok_or(TaskDomainError::MalformedReferenceType(raw))
    }

    /// Wraps a key already known to be normalised.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ReferenceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of work a task represents, such as `PICKUP` or `DELIVERY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskType(String);

impl TaskType {
    /// Creates a validated task type.
    ///
    /// Input is trimmed and upper-cased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedTaskType`] when the key is empty,
    /// does not start with a letter, or contains characters outside
    /// `[A-Z0-9_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        normalize_key(&raw)
            .map(Self)
            .ok_or(TaskDomainError::MalformedTaskType(raw))
    }

    /// Wraps a key already known to be normalised.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cases a trimmed key, returning `None` when it is not a valid
/// catalog identifier.
fn normalize_key(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_ascii_uppercase();
    let starts_with_letter = normalized
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_uppercase());
    let is_valid = starts_with_letter
        && normalized
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_');
    is_valid.then_some(normalized)
}
