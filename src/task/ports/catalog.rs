//! Task type catalog port.

use crate::task::domain::{ReferenceType, TaskType};
use thiserror::Error;

/// Errors raised when a request falls outside the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The reference type has no catalog entry.
    #[error("reference type {0} has no catalog entry")]
    InvalidReferenceType(ReferenceType),

    /// The task type is not listed for the reference type.
    #[error("task type {task_type} is not applicable to reference type {reference_type}")]
    TaskTypeNotApplicable {
        /// Reference type that was looked up.
        reference_type: ReferenceType,
        /// Task type that is missing from its entry.
        task_type: TaskType,
    },
}

/// Static mapping from reference types to the task types they imply.
pub trait TaskTypeCatalog: Send + Sync {
    /// Returns the ordered task types for `reference_type`, or `None` when
    /// the catalog has no entry for it.
    fn task_types_for(&self, reference_type: &ReferenceType) -> Option<&[TaskType]>;

    /// Returns the ordered task types for `reference_type`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidReferenceType`] when the catalog has no
    /// entry for `reference_type`.
    fn require(&self, reference_type: &ReferenceType) -> Result<&[TaskType], CatalogError> {
        self.task_types_for(reference_type)
            .ok_or_else(|| CatalogError::InvalidReferenceType(reference_type.clone()))
    }

    /// Checks that `task_type` belongs to the entry for `reference_type`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidReferenceType`] when the reference type
    /// is unknown or [`CatalogError::TaskTypeNotApplicable`] when the task
    /// type is not listed.
    fn ensure_applicable(
        &self,
        reference_type: &ReferenceType,
        task_type: &TaskType,
    ) -> Result<(), CatalogError> {
        if self.require(reference_type)?.contains(task_type) {
            return Ok(());
        }
        Err(CatalogError::TaskTypeNotApplicable {
            reference_type: reference_type.clone(),
            task_type: task_type.clone(),
        })
    }
}
