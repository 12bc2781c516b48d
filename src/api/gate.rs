//! Per-item mutation exclusion
//!
//! While a submission or cancellation for a content item is in flight, a
//! second mutation for the same item must not start; two concurrent writes
//! would race on the same slot set. Items are independent, so mutations on
//! different items proceed without coordination.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

use super::error::ApiError;

/// Tracks which content items have a mutation in flight
#[derive(Debug, Clone, Default)]
pub struct MutationGate {
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl MutationGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a mutation for one content item
    ///
    /// The returned guard releases the item when dropped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MutationInFlight` while another mutation for the
    /// same item holds a guard.
    pub fn try_begin(&self, content_id: Uuid) -> Result<MutationGuard, ApiError> {
        let mut held = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !held.insert(content_id) {
            return Err(ApiError::MutationInFlight { content_id });
        }

        Ok(MutationGuard {
            gate: self.clone(),
            content_id,
        })
    }

    /// Check whether a mutation for the item is in flight
    pub fn is_busy(&self, content_id: Uuid) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&content_id)
    }
}

/// RAII guard for one in-flight mutation
#[derive(Debug)]
pub struct MutationGuard {
    gate: MutationGate,
    content_id: Uuid,
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        self.gate
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.content_id);
    }
}
