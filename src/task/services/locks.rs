//! Per-reference serialisation for reassignment.

use crate::task::domain::TaskReference;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::OwnedMutexGuard;

/// Map size above which expired entries are purged on acquisition.
const PURGE_THRESHOLD: usize = 64;

/// Lock table that serialises work on the same reference entity.
///
/// Different references proceed in parallel. Entries are held weakly and
/// disappear once no guard for the reference is alive.
#[derive(Debug, Default)]
pub(crate) struct ReferenceLocks {
    locks: Mutex<HashMap<TaskReference, Weak<tokio::sync::Mutex<()>>>>,
}

/// Guard holding a reference lock until dropped.
#[derive(Debug)]
pub(crate) struct ReferenceGuard {
    _guard: OwnedMutexGuard<()>,
}

impl ReferenceLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Waits until no other caller holds `reference`, then takes it.
    pub(crate) async fn acquire(&self, reference: &TaskReference) -> ReferenceGuard {
        let mutex = {
            let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            if map.len() > PURGE_THRESHOLD {
                map.retain(|_, weak| weak.strong_count() > 0);
            }
            if let Some(existing) = map.get(reference).and_then(Weak::upgrade) {
                existing
            } else {
                let created = Arc::new(tokio::sync::Mutex::new(()));
                map.insert(reference.clone(), Arc::downgrade(&created));
                created
            }
        };
        ReferenceGuard {
            _guard: mutex.lock_owned().await,
        }
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
