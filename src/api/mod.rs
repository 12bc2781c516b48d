//! Publish backend boundary
//!
//! The scheduling engine never talks to storage directly; it consumes the
//! backend through the [`PublishBackend`] trait, which carries exactly the
//! four operations the engine needs: fetch a date range of scheduled
//! items, fetch one item, submit a schedule, and cancel not-yet-posted
//! slots. [`client::HttpBackend`] is the production implementation;
//! tests substitute their own.
//!
//! [`gate::MutationGate`] enforces the one-mutation-per-item rule at this
//! boundary.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{ContentItem, Platform, ScheduleSlot};

pub mod client;
pub mod error;
pub mod gate;

pub use client::{ClientConfig, HttpBackend};
pub use error::ApiError;
pub use gate::{MutationGate, MutationGuard};

/// Acknowledgement for a schedule submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAck {
    pub content_id: Uuid,

    /// Number of slots the backend persisted
    pub scheduled: u32,
}

/// Acknowledgement for a slot cancellation
#[derive(Debug, Clone, Deserialize)]
pub struct CancelAck {
    pub content_id: Uuid,

    /// Number of slots the backend removed
    pub removed: u32,
}

/// Operations the publish backend exposes to the scheduling engine
///
/// Slot storage and the review workflow live behind this seam; the engine
/// only reads items and requests slot mutations.
#[async_trait]
pub trait PublishBackend: Send + Sync {
    /// Fetch every content item holding at least one slot whose date falls
    /// within the inclusive range
    async fn fetch_batch(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<ContentItem>, ApiError>;

    /// Fetch one item's full slot set
    async fn fetch_content(&self, content_id: Uuid) -> Result<ContentItem, ApiError>;

    /// Persist a schedule
    ///
    /// With `is_reschedule` the backend replaces the item's existing
    /// not-yet-posted slots with the supplied list, leaving posted slots
    /// untouched; otherwise it creates new slots.
    async fn submit_schedule(
        &self,
        content_id: Uuid,
        slots: &[ScheduleSlot],
        is_reschedule: bool,
    ) -> Result<SubmitAck, ApiError>;

    /// Remove the named not-yet-posted slots
    ///
    /// The backend rejects the whole request if any named platform's slot
    /// has already been posted.
    async fn cancel_slots(
        &self,
        content_id: Uuid,
        platforms: &[Platform],
    ) -> Result<CancelAck, ApiError>;
}
