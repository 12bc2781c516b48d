//! Per-item scheduling session
//!
//! A session owns the draft state for exactly one content item while the
//! scheduler is open for it. It is created from a freshly fetched item,
//! lives for the duration of the edit, and is dropped on close; nothing in
//! it outlives the edit or leaks into another item's session.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::api::{MutationGate, PublishBackend, SubmitAck};
use crate::error::{Error, Result};
use crate::models::{ContentItem, Platform};

use super::draft::DraftStore;
use super::error::ScheduleResult;
use super::payload::{build_slots, SchedulePayload};
use super::validate::validate_entry;

/// Editing session for one content item's schedule
#[derive(Debug)]
pub struct ScheduleSession {
    content_id: Uuid,
    title: String,
    store: DraftStore,
    is_reschedule: bool,
}

impl ScheduleSession {
    /// Open a session for a content item
    ///
    /// Platforms whose slot has already been posted are immutable and are
    /// excluded from the session's schedulable set; the remaining slots
    /// seed the draft store. `is_reschedule` is set when the item already
    /// holds at least one not-yet-posted slot, i.e. the backend has
    /// something to replace on submission.
    pub fn open(item: &ContentItem, deployment_platforms: &[Platform]) -> Self {
        let posted = item.posted_platforms();
        let schedulable: Vec<Platform> = deployment_platforms
            .iter()
            .copied()
            .filter(|p| !posted.contains(p))
            .collect();

        let existing = item.unposted_slots();
        let is_reschedule = !existing.is_empty();
        let store = DraftStore::seeded(&schedulable, &existing);

        tracing::debug!(
            content_id = %item.id,
            schedulable = schedulable.len(),
            seeded = existing.len(),
            is_reschedule,
            "opened scheduling session"
        );

        Self {
            content_id: item.id,
            title: item.title.clone(),
            store,
            is_reschedule,
        }
    }

    pub fn content_id(&self) -> Uuid {
        self.content_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_reschedule(&self) -> bool {
        self.is_reschedule
    }

    /// The draft store under edit
    pub fn store(&self) -> &DraftStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DraftStore {
        &mut self.store
    }

    /// Validate the active draft and build the canonical payload
    ///
    /// The active key's entry is gated exactly as the operator sees it at
    /// the moment submit is invoked; on failure the draft is untouched.
    pub fn build_payload(&self, now: NaiveDateTime) -> ScheduleResult<SchedulePayload> {
        validate_entry(self.store.entry(self.store.active()), now)?;
        Ok(SchedulePayload {
            slots: build_slots(&self.store),
            is_reschedule: self.is_reschedule,
        })
    }

    /// Validate, build, and submit the schedule to the backend
    ///
    /// At most one mutation per content item may be in flight; a second
    /// submission while one is outstanding fails locally. Draft state is
    /// preserved on every failure path so the operator can retry without
    /// re-entering data.
    pub async fn submit<B: PublishBackend>(
        &self,
        backend: &B,
        gate: &MutationGate,
    ) -> Result<SubmitAck> {
        let payload = self
            .build_payload(Local::now().naive_local())
            .map_err(Error::Schedule)?;

        let _guard = gate
            .try_begin(self.content_id)
            .map_err(Error::Submission)?;

        tracing::info!(
            content_id = %self.content_id,
            slots = payload.slots.len(),
            is_reschedule = payload.is_reschedule,
            "submitting schedule"
        );

        backend
            .submit_schedule(self.content_id, &payload.slots, payload.is_reschedule)
            .await
            .map_err(Error::Submission)
    }
}
