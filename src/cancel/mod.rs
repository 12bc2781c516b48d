//! Slot cancellation workflow
//!
//! Lets an operator remove a chosen subset of a content item's
//! not-yet-posted slots. Posted slots are never offered and any attempt to
//! select one fails locally, before the backend is involved. After a
//! successful cancellation the session does not mutate its local slot
//! view; the caller refetches and re-aggregates so local state can never
//! diverge from backend truth after a partial failure.

use std::collections::HashSet;
use thiserror::Error;

use crate::api::{CancelAck, MutationGate, PublishBackend};
use crate::error::{Error, Result};
use crate::models::{ContentItem, Platform, ScheduleSlot};

/// Errors raised by the cancellation workflow before any remote call
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CancelError {
    /// Confirm invoked with nothing selected
    #[error("No slots selected for cancellation")]
    EmptySelection,

    /// The platform's slot has already been posted
    #[error("Slot for {platform} has already been posted")]
    AlreadyPosted { platform: Platform },

    /// The item holds no slot for the platform
    #[error("No slot for {platform} on this item")]
    UnknownSlot { platform: Platform },
}

impl CancelError {
    /// Get localized description for operator-facing notices
    pub fn localized_desc(&self) -> String {
        match self {
            Self::EmptySelection => crate::i18n::t!("errors.cancel.empty_selection").to_string(),
            Self::AlreadyPosted { platform } => crate::i18n::t!(
                "errors.cancel.already_posted",
                platform = platform.korean_label()
            )
            .to_string(),
            Self::UnknownSlot { platform } => crate::i18n::t!(
                "errors.cancel.unknown_slot",
                platform = platform.korean_label()
            )
            .to_string(),
        }
    }
}

/// Selection state for cancelling one item's upcoming slots
#[derive(Debug, Clone)]
pub struct CancellationSession {
    item: ContentItem,
    selected: HashSet<Platform>,
}

impl CancellationSession {
    /// Start a selection over a freshly fetched item
    pub fn new(item: ContentItem) -> Self {
        Self {
            item,
            selected: HashSet::new(),
        }
    }

    pub fn content_item(&self) -> &ContentItem {
        &self.item
    }

    /// Slots eligible for cancellation: exactly the not-yet-posted ones
    pub fn candidates(&self) -> Vec<&ScheduleSlot> {
        self.item.unposted_slots()
    }

    /// Select one platform's slot for cancellation
    ///
    /// # Errors
    ///
    /// Fails with `AlreadyPosted` for a posted slot and `UnknownSlot` for
    /// a platform the item holds no slot for; neither reaches the backend.
    pub fn select(&mut self, platform: Platform) -> std::result::Result<(), CancelError> {
        match self.item.slot_for(platform) {
            Some(slot) if slot.is_posted => Err(CancelError::AlreadyPosted { platform }),
            Some(_) => {
                self.selected.insert(platform);
                Ok(())
            }
            None => Err(CancelError::UnknownSlot { platform }),
        }
    }

    /// Drop one platform from the selection
    pub fn deselect(&mut self, platform: Platform) {
        self.selected.remove(&platform);
    }

    /// Select every candidate, or clear the selection if every candidate
    /// is already selected
    pub fn toggle_all(&mut self) {
        let candidates: HashSet<Platform> =
            self.candidates().iter().map(|s| s.platform).collect();

        if self.selected == candidates {
            self.selected.clear();
        } else {
            self.selected = candidates;
        }
    }

    /// Currently selected platforms, in candidate order
    pub fn selected(&self) -> Vec<Platform> {
        self.candidates()
            .iter()
            .map(|s| s.platform)
            .filter(|p| self.selected.contains(p))
            .collect()
    }

    /// Whether confirm may be enabled
    pub fn can_confirm(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Hand the selection to the backend
    ///
    /// Fails locally with `EmptySelection` when nothing is selected. On
    /// success the caller must refetch the item (and re-run the calendar
    /// aggregation); this session's slot view is intentionally left as-is.
    pub async fn confirm<B: PublishBackend>(
        &self,
        backend: &B,
        gate: &MutationGate,
    ) -> Result<CancelAck> {
        if !self.can_confirm() {
            return Err(Error::Cancel(CancelError::EmptySelection));
        }

        let platforms = self.selected();

        let _guard = gate
            .try_begin(self.item.id)
            .map_err(Error::Cancellation)?;

        tracing::info!(
            content_id = %self.item.id,
            platforms = platforms.len(),
            "cancelling scheduled slots"
        );

        backend
            .cancel_slots(self.item.id, &platforms)
            .await
            .map_err(Error::Cancellation)
    }
}
