//! Common test utilities

use balhaeng::models::{ContentItem, ContentType, Platform, ScheduleSlot};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Build a calendar date in 2025
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

/// Build a minute-precision time of day
pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Slot that has not been posted yet
#[allow(dead_code)]
pub fn pending_slot(platform: Platform, d: NaiveDate, t: NaiveTime) -> ScheduleSlot {
    ScheduleSlot::pending(platform, d, t)
}

/// Slot that has already been published
#[allow(dead_code)]
pub fn posted_slot(platform: Platform, d: NaiveDate, t: NaiveTime) -> ScheduleSlot {
    ScheduleSlot {
        platform,
        date: d,
        time: t,
        is_posted: true,
    }
}

/// Create a text item with the given slots
#[allow(dead_code)]
pub fn create_item(title: &str, slots: Vec<ScheduleSlot>) -> ContentItem {
    let mut item = ContentItem::new(Uuid::new_v4(), title, ContentType::Text);
    item.slots = slots;
    item
}

/// JSON body for one slot as the backend sends it
#[allow(dead_code)]
pub fn slot_json(platform: &str, date: &str, time: &str, is_posted: bool) -> serde_json::Value {
    serde_json::json!({
        "platform": platform,
        "date": date,
        "time": time,
        "is_posted": is_posted,
    })
}

/// JSON envelope the backend wraps every response in
#[allow(dead_code)]
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": data,
        "error": null,
    })
}

/// JSON body for a content item as the backend sends it
#[allow(dead_code)]
pub fn item_json(id: Uuid, title: &str, slots: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "content_type": "text",
        "slots": slots,
    })
}
