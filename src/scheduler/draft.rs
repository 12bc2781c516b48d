//! Platform draft working state
//!
//! Holds per-platform working date/time while an operator edits a single
//! content item's schedule. The store is created when the scheduler opens
//! for an item and discarded when it closes; it is never persisted.
//!
//! The map is keyed by [`DraftKey`]: one entry per concrete platform plus
//! the "all platforms" shorthand. Edits always target the active key.
//! Setting a complete date/time while `AllPlatforms` is active overwrites
//! every concrete platform's entry with the same value; editing a concrete
//! platform afterwards diverges from the shorthand and clears it.
//!
//! All operations are pure local state transitions and cannot fail.
//! Partial input (a time without a date) is tolerated here and only
//! rejected by the validator at submission time.

use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

use crate::models::{Platform, ScheduleSlot};

// ============================================================================
// Draft Key
// ============================================================================

/// Key into the draft map: one concrete platform or the shorthand that
/// targets every platform at once
///
/// The shorthand exists only inside the draft store; it never reaches a
/// persisted slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftKey {
    Platform(Platform),
    AllPlatforms,
}

impl DraftKey {
    /// Check if this is the all-platforms shorthand
    pub fn is_all(&self) -> bool {
        matches!(self, Self::AllPlatforms)
    }

    /// Get the concrete platform, if any
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Self::Platform(p) => Some(*p),
            Self::AllPlatforms => None,
        }
    }
}

impl std::fmt::Display for DraftKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Platform(p) => write!(f, "{}", p),
            Self::AllPlatforms => write!(f, "all"),
        }
    }
}

// ============================================================================
// Draft Entry
// ============================================================================

/// In-progress date/time for one draft key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl DraftEntry {
    /// Create a complete entry
    pub fn full(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
        }
    }

    /// Check if neither field is set
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }

    /// Check if both fields are set
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Get the complete pair, if both fields are set
    pub fn as_pair(&self) -> Option<(NaiveDate, NaiveTime)> {
        match (self.date, self.time) {
            (Some(date), Some(time)) => Some((date, time)),
            _ => None,
        }
    }

    fn clear(&mut self) {
        self.date = None;
        self.time = None;
    }
}

// ============================================================================
// Draft Store
// ============================================================================

/// Working state for one content item's schedule
///
/// Scoped to a single editing session: seeded from the item's existing
/// slots on open, discarded on close. Edits write through to the active
/// key's entry, so switching keys or submitting never loses the last edit.
#[derive(Debug, Clone)]
pub struct DraftStore {
    /// Schedulable platforms in deployment order
    platforms: Vec<Platform>,

    /// Per-platform working entries
    entries: HashMap<Platform, DraftEntry>,

    /// The all-platforms shorthand entry
    all_entry: DraftEntry,

    /// Key edits currently target
    active: DraftKey,
}

impl DraftStore {
    /// Create an empty store over the given platforms
    pub fn new(platforms: &[Platform]) -> Self {
        let entries = platforms.iter().map(|p| (*p, DraftEntry::default())).collect();
        Self {
            platforms: platforms.to_vec(),
            entries,
            all_entry: DraftEntry::default(),
            active: DraftKey::AllPlatforms,
        }
    }

    /// Create a store seeded from an item's existing slots
    ///
    /// One entry is filled per platform that already holds a slot; every
    /// other platform starts empty. When all seeded slots share one
    /// identical date/time the shorthand entry is pre-filled with it as a
    /// display convenience. Slots for platforms outside `platforms` are
    /// ignored.
    pub fn seeded(platforms: &[Platform], existing: &[&ScheduleSlot]) -> Self {
        let mut store = Self::new(platforms);

        let mut seeded_pairs = Vec::new();
        for slot in existing {
            if !platforms.contains(&slot.platform) {
                continue;
            }
            store
                .entries
                .insert(slot.platform, DraftEntry::full(slot.date, slot.time));
            seeded_pairs.push((slot.date, slot.time));
        }

        if let Some(first) = seeded_pairs.first() {
            if seeded_pairs.iter().all(|pair| pair == first) {
                store.all_entry = DraftEntry::full(first.0, first.1);
            }
        }

        store
    }

    /// Schedulable platforms in deployment order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Key edits currently target
    pub fn active(&self) -> DraftKey {
        self.active
    }

    /// Get the entry stored under a key
    pub fn entry(&self, key: DraftKey) -> DraftEntry {
        match key {
            DraftKey::AllPlatforms => self.all_entry,
            DraftKey::Platform(p) => self.entries.get(&p).copied().unwrap_or_default(),
        }
    }

    /// The shorthand entry
    pub fn all_entry(&self) -> DraftEntry {
        self.all_entry
    }

    /// Switch which key subsequent edits target
    ///
    /// Switching never clears other keys' independent drafts. A platform
    /// that is not schedulable in this session is ignored.
    pub fn select_primary(&mut self, key: DraftKey) {
        if let DraftKey::Platform(p) = key {
            if !self.platforms.contains(&p) {
                tracing::debug!(platform = %p, "ignoring select of unschedulable platform");
                return;
            }
        }
        self.active = key;
    }

    /// Set the active key's date
    pub fn set_date(&mut self, date: NaiveDate) {
        self.apply_edit(|entry| entry.date = Some(date));
    }

    /// Set the active key's time
    pub fn set_time(&mut self, time: NaiveTime) {
        self.apply_edit(|entry| entry.time = Some(time));
    }

    /// Set the active key's complete date/time
    ///
    /// Under the shorthand key this overwrites every concrete platform's
    /// entry with the same value. Under a concrete key it writes only that
    /// platform and clears the shorthand, since the platforms no longer
    /// hold one identical value.
    pub fn set_date_time(&mut self, date: NaiveDate, time: NaiveTime) {
        self.apply_edit(|entry| {
            entry.date = Some(date);
            entry.time = Some(time);
        });
    }

    fn apply_edit(&mut self, edit: impl FnOnce(&mut DraftEntry)) {
        match self.active {
            DraftKey::AllPlatforms => {
                edit(&mut self.all_entry);
                // fan out only once the pair is complete
                if let Some((date, time)) = self.all_entry.as_pair() {
                    for platform in &self.platforms {
                        self.entries.insert(*platform, DraftEntry::full(date, time));
                    }
                }
            }
            DraftKey::Platform(platform) => {
                edit(self.entries.entry(platform).or_default());
                self.all_entry.clear();
            }
        }
    }

    /// Copy one platform's complete draft into another ("same as")
    ///
    /// Silently ignored when the source is empty or either key is not a
    /// schedulable platform.
    pub fn copy_from(&mut self, target: Platform, source: Platform) {
        if target == source
            || !self.platforms.contains(&target)
            || !self.platforms.contains(&source)
        {
            return;
        }

        let Some((date, time)) = self.entry(DraftKey::Platform(source)).as_pair() else {
            tracing::debug!(source = %source, "copy source has no draft, ignoring");
            return;
        };

        self.entries.insert(target, DraftEntry::full(date, time));
        self.all_entry.clear();
    }

    /// Platforms that can be offered as "same as" sources for the active key
    ///
    /// Every schedulable platform other than the active one that currently
    /// holds a complete date/time.
    pub fn offerable_copy_sources(&self) -> Vec<Platform> {
        self.platforms
            .iter()
            .copied()
            .filter(|p| DraftKey::Platform(*p) != self.active)
            .filter(|p| self.entry(DraftKey::Platform(*p)).is_complete())
            .collect()
    }

    /// Complete per-platform drafts in deployment order
    pub fn complete_entries(&self) -> Vec<(Platform, NaiveDate, NaiveTime)> {
        self.platforms
            .iter()
            .filter_map(|p| {
                self.entry(DraftKey::Platform(*p))
                    .as_pair()
                    .map(|(date, time)| (*p, date, time))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn all_four() -> Vec<Platform> {
        Platform::all()
    }

    #[test]
    fn test_all_fan_out_overwrites_every_platform() {
        let mut store = DraftStore::new(&all_four());
        store.select_primary(DraftKey::Platform(Platform::Twitter));
        store.set_date_time(d(5), t(8));

        store.select_primary(DraftKey::AllPlatforms);
        store.set_date_time(d(1), t(9));

        for platform in Platform::all() {
            assert_eq!(
                store.entry(DraftKey::Platform(platform)),
                DraftEntry::full(d(1), t(9)),
            );
        }
        assert_eq!(store.all_entry(), DraftEntry::full(d(1), t(9)));
    }

    #[test]
    fn test_partial_all_edit_does_not_fan_out() {
        let mut store = DraftStore::new(&all_four());
        store.set_date(d(1));

        for platform in Platform::all() {
            assert!(store.entry(DraftKey::Platform(platform)).is_empty());
        }

        store.set_time(t(9));
        assert!(store.entry(DraftKey::Platform(Platform::Web)).is_complete());
    }

    #[test]
    fn test_concrete_edit_clears_shorthand() {
        let mut store = DraftStore::new(&all_four());
        store.set_date_time(d(1), t(9));

        store.select_primary(DraftKey::Platform(Platform::Twitter));
        store.set_date_time(d(2), t(10));

        assert!(store.all_entry().is_empty());
        assert_eq!(
            store.entry(DraftKey::Platform(Platform::Twitter)),
            DraftEntry::full(d(2), t(10)),
        );
        // the other platforms keep their individually held drafts
        assert_eq!(
            store.entry(DraftKey::Platform(Platform::Web)),
            DraftEntry::full(d(1), t(9)),
        );
    }

    #[test]
    fn test_copy_from_empty_source_is_noop() {
        let mut store = DraftStore::new(&all_four());
        store.select_primary(DraftKey::Platform(Platform::Instagram));
        store.set_date_time(d(1), t(9));

        store.copy_from(Platform::Twitter, Platform::Facebook);
        assert!(store.entry(DraftKey::Platform(Platform::Twitter)).is_empty());

        store.copy_from(Platform::Twitter, Platform::Instagram);
        assert_eq!(
            store.entry(DraftKey::Platform(Platform::Twitter)),
            DraftEntry::full(d(1), t(9)),
        );
    }

    #[test]
    fn test_copy_sources_exclude_active_and_incomplete() {
        let mut store = DraftStore::new(&all_four());
        store.select_primary(DraftKey::Platform(Platform::Instagram));
        store.set_date_time(d(1), t(9));
        store.select_primary(DraftKey::Platform(Platform::Web));
        store.set_date(d(2)); // incomplete

        assert_eq!(store.offerable_copy_sources(), vec![Platform::Instagram]);
    }

    #[test]
    fn test_seed_identical_slots_prefills_shorthand() {
        let web = ScheduleSlot::pending(Platform::Web, d(1), t(14));
        let insta = ScheduleSlot::pending(Platform::Instagram, d(1), t(14));
        let store = DraftStore::seeded(&all_four(), &[&web, &insta]);

        assert_eq!(store.all_entry(), DraftEntry::full(d(1), t(14)));
        assert_eq!(
            store.entry(DraftKey::Platform(Platform::Web)),
            DraftEntry::full(d(1), t(14)),
        );
        assert!(store.entry(DraftKey::Platform(Platform::Facebook)).is_empty());
    }

    #[test]
    fn test_seed_divergent_slots_leaves_shorthand_empty() {
        let web = ScheduleSlot::pending(Platform::Web, d(1), t(14));
        let insta = ScheduleSlot::pending(Platform::Instagram, d(2), t(14));
        let store = DraftStore::seeded(&all_four(), &[&web, &insta]);

        assert!(store.all_entry().is_empty());
    }

    #[test]
    fn test_select_unschedulable_platform_is_ignored() {
        let mut store = DraftStore::new(&[Platform::Web, Platform::Instagram]);
        store.select_primary(DraftKey::Platform(Platform::Twitter));
        assert_eq!(store.active(), DraftKey::AllPlatforms);
    }
}
