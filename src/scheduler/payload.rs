//! Canonical submission payload
//!
//! Reduces a [`DraftStore`] into the slot list sent to the backend. The
//! all-platforms shorthand, when it is the active key and holds a complete
//! value, is an authoritative override: one identical slot per schedulable
//! platform, ignoring any independently held drafts. Otherwise every
//! platform with a complete draft is emitted with its own value. The
//! shorthand key itself is never emitted.

use crate::models::ScheduleSlot;

use super::draft::DraftStore;

/// The canonical slot list for one submission
#[derive(Debug, Clone)]
pub struct SchedulePayload {
    pub slots: Vec<ScheduleSlot>,

    /// Whether the backend should replace existing not-yet-posted slots
    /// instead of creating the item's first schedule
    pub is_reschedule: bool,
}

/// Build the slot list from a draft store
///
/// Emits at most one slot per platform, in deployment order, every slot
/// marked not posted. An empty result means no draft was complete.
pub fn build_slots(store: &DraftStore) -> Vec<ScheduleSlot> {
    if store.active().is_all() {
        if let Some((date, time)) = store.all_entry().as_pair() {
            return store
                .platforms()
                .iter()
                .map(|platform| ScheduleSlot::pending(*platform, date, time))
                .collect();
        }
    }

    store
        .complete_entries()
        .into_iter()
        .map(|(platform, date, time)| ScheduleSlot::pending(platform, date, time))
        .collect()
}
