//! Static task type catalog, built in or loaded from TOML.

use crate::task::{
    domain::{ReferenceType, TaskDomainError, TaskType},
    ports::TaskTypeCatalog,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors raised while building a catalog from configuration.
#[derive(Debug, Error)]
pub enum CatalogConfigError {
    /// The document is not valid TOML or does not match the expected shape.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A reference or task type key is malformed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Two document keys normalise to the same reference type.
    #[error("reference type {0} is configured more than once")]
    DuplicateReferenceType(ReferenceType),

    /// An entry lists no task types.
    #[error("reference type {0} lists no task types")]
    EmptyEntry(ReferenceType),

    /// An entry lists the same task type twice.
    #[error("reference type {reference_type} lists task type {task_type} more than once")]
    DuplicateTaskType {
        /// Entry containing the duplicate.
        reference_type: ReferenceType,
        /// Repeated task type.
        task_type: TaskType,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    reference_types: BTreeMap<String, Vec<String>>,
}

/// Immutable catalog backed by an in-process map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTaskTypeCatalog {
    entries: HashMap<ReferenceType, Vec<TaskType>>,
}

impl StaticTaskTypeCatalog {
    /// Creates a catalog with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates the catalog shipped with the crate:
    ///
    /// | Reference type | Task types |
    /// |----------------|------------|
    /// | `ORDER` | `CREATE_INVOICE`, `ARRANGE_PICKUP` |
    /// | `ENTITY` | `ASSIGN_CUSTOMER_TO_SALES_PERSON`, `COLLECT_PAYMENT` |
    /// | `SHIPMENT` | `PICKUP`, `DELIVERY` |
    #[must_use]
    pub fn standard() -> Self {
        let builtin: [(&'static str, &[&'static str]); 3] = [
            ("ORDER", &["CREATE_INVOICE", "ARRANGE_PICKUP"]),
            (
                "ENTITY",
                &["ASSIGN_CUSTOMER_TO_SALES_PERSON", "COLLECT_PAYMENT"],
            ),
            ("SHIPMENT", &["PICKUP", "DELIVERY"]),
        ];
        let entries = builtin
            .into_iter()
            .map(|(reference_type, task_types)| {
                (
                    ReferenceType::from_static(reference_type),
                    task_types
                        .iter()
                        .copied()
                        .map(TaskType::from_static)
                        .collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Parses a catalog from a TOML document of the form:
    ///
    /// ```toml
    /// [reference_types]
    /// SHIPMENT = ["PICKUP", "DELIVERY"]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogConfigError`] when the document cannot be parsed, an
    /// entry is malformed, empty, or repeats a task type, or two keys such as
    /// `shipment` and `SHIPMENT` name the same reference type.
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogConfigError> {
        let parsed: CatalogDocument = toml::from_str(document)?;
        let mut catalog = Self::empty();
        for (raw, task_types) in parsed.reference_types {
            let key = ReferenceType::new(raw)?;
            if catalog.entries.contains_key(&key) {
                return Err(CatalogConfigError::DuplicateReferenceType(key));
            }
            catalog = catalog.with_entry(key.as_str(), task_types)?;
        }
        Ok(catalog)
    }

    /// Adds or replaces the entry for `reference_type`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogConfigError`] when a key is malformed, the entry is
    /// empty, or a task type repeats.
    pub fn with_entry(
        mut self,
        reference_type: impl Into<String>,
        task_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, CatalogConfigError> {
        let key = ReferenceType::new(reference_type)?;
        let mut validated: Vec<TaskType> = Vec::new();
        for raw in task_types {
            let task_type = TaskType::new(raw)?;
            if validated.contains(&task_type) {
                return Err(CatalogConfigError::DuplicateTaskType {
                    reference_type: key,
                    task_type,
                });
            }
            validated.push(task_type);
        }
        if validated.is_empty() {
            return Err(CatalogConfigError::EmptyEntry(key));
        }
        self.entries.insert(key, validated);
        Ok(self)
    }

    /// Returns the configured reference types in sorted order.
    #[must_use]
    pub fn reference_types(&self) -> Vec<&ReferenceType> {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        keys
    }
}

impl Default for StaticTaskTypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TaskTypeCatalog for StaticTaskTypeCatalog {
    fn task_types_for(&self, reference_type: &ReferenceType) -> Option<&[TaskType]> {
        self.entries.get(reference_type).map(Vec::as_slice)
    }
}
