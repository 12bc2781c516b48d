//! Day-bucketing aggregation
//!
//! Turns a fetched batch of content items into display-ready calendar
//! events: one event per `(item, day)` pair that holds at least one slot.
//! The output is fully determined by the input: ordering uses only
//! `(day, input batch order)` across events and `(posted first, time
//! ascending)` within one, so re-running over an unchanged batch yields an
//! identical result.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::{ContentItem, ScheduleSlot};

use super::event::CalendarEvent;

/// Bucket a batch of content items into per-day calendar events
///
/// An item with slots spanning several days produces one independent event
/// per day; items without slots produce nothing.
pub fn aggregate_batch(items: &[ContentItem]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for item in items {
        let mut by_day: HashMap<NaiveDate, Vec<ScheduleSlot>> = HashMap::new();
        for slot in &item.slots {
            by_day.entry(slot.date).or_default().push(slot.clone());
        }

        let mut days: Vec<_> = by_day.into_iter().collect();
        days.sort_by_key(|(day, _)| *day);

        for (day, mut slots) in days {
            slots.sort_by(|a, b| {
                b.is_posted
                    .cmp(&a.is_posted)
                    .then_with(|| a.time.cmp(&b.time))
            });

            events.push(CalendarEvent {
                content_id: item.id,
                title: item.title.clone(),
                content_type: item.content_type,
                day,
                slots_on_day: slots,
            });
        }
    }

    // stable sort keeps batch order for items sharing a day
    events.sort_by_key(|event| event.day);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, Platform};
    use chrono::NaiveTime;
    use uuid::Uuid;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn slot(platform: Platform, day: u32, hour: u32, posted: bool) -> ScheduleSlot {
        ScheduleSlot {
            platform,
            date: d(day),
            time: t(hour),
            is_posted: posted,
        }
    }

    fn item(title: &str, slots: Vec<ScheduleSlot>) -> ContentItem {
        let mut item = ContentItem::new(Uuid::new_v4(), title, ContentType::Text);
        item.slots = slots;
        item
    }

    #[test]
    fn test_multi_day_item_produces_event_per_day() {
        let batch = vec![item(
            "기사",
            vec![
                slot(Platform::Web, 1, 8, true),
                slot(Platform::Instagram, 1, 9, false),
                slot(Platform::Twitter, 2, 10, false),
            ],
        )];

        let events = aggregate_batch(&batch);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].day, d(1));
        assert_eq!(events[1].day, d(2));
        assert_eq!(events[1].slots_on_day.len(), 1);
    }

    #[test]
    fn test_posted_slots_come_first_then_time_ascending() {
        let batch = vec![item(
            "기사",
            vec![
                slot(Platform::Instagram, 1, 9, false),
                slot(Platform::Web, 1, 8, true),
                slot(Platform::Facebook, 1, 7, false),
            ],
        )];

        let events = aggregate_batch(&batch);
        let platforms: Vec<_> = events[0]
            .slots_on_day
            .iter()
            .map(|s| s.platform)
            .collect();
        assert_eq!(
            platforms,
            vec![Platform::Web, Platform::Facebook, Platform::Instagram]
        );
    }

    #[test]
    fn test_slotless_item_produces_nothing() {
        let batch = vec![item("빈 기사", vec![])];
        assert!(aggregate_batch(&batch).is_empty());
    }

    #[test]
    fn test_batch_order_preserved_within_day() {
        let first = item("첫번째", vec![slot(Platform::Web, 1, 9, false)]);
        let second = item("두번째", vec![slot(Platform::Web, 1, 8, false)]);
        let events = aggregate_batch(&[first, second]);

        assert_eq!(events[0].title, "첫번째");
        assert_eq!(events[1].title, "두번째");
    }
}
