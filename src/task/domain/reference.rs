//! Reference entity addressing.

use super::{ReferenceId, ReferenceType, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the external entity a task serves by `(reference id, type)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskReference {
    reference_id: ReferenceId,
    reference_type: ReferenceType,
}

impl TaskReference {
    /// Creates a reference from validated parts.
    #[must_use]
    pub const fn new(reference_id: ReferenceId, reference_type: ReferenceType) -> Self {
        Self {
            reference_id,
            reference_type,
        }
    }

    /// Creates a reference from raw request values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the identifier or type is invalid.
    pub fn from_parts(
        reference_id: u64,
        reference_type: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self::new(
            ReferenceId::new(reference_id)?,
            ReferenceType::new(reference_type)?,
        ))
    }

    /// Returns the reference identifier.
    #[must_use]
    pub const fn reference_id(&self) -> ReferenceId {
        self.reference_id
    }

    /// Returns the reference type.
    #[must_use]
    pub const fn reference_type(&self) -> &ReferenceType {
        &self.reference_type
    }
}

impl fmt::Display for TaskReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.reference_type, self.reference_id)
    }
}
