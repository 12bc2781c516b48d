//! Calendar event and granularity types

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ContentType, ScheduleSlot};

// ============================================================================
// Granularity
// ============================================================================

/// Calendar display scale requested by the caller
///
/// Granularity only shapes the date range a caller fetches; bucketing is
/// always by exact day regardless of scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Get Korean name
    pub fn korean_label(&self) -> &'static str {
        match self {
            Self::Day => "일간",
            Self::Week => "주간",
            Self::Month => "월간",
        }
    }

    /// Create from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" | "일간" => Some(Self::Day),
            "week" | "주간" => Some(Self::Week),
            "month" | "월간" => Some(Self::Month),
            _ => None,
        }
    }

    /// Inclusive date range to fetch for a view anchored at `anchor`
    ///
    /// Day: the anchor itself. Week: the anchor's ISO week, Monday through
    /// Sunday. Month: first through last day of the anchor's month.
    pub fn fetch_window(&self, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Day => (anchor, anchor),
            Self::Week => {
                let week = anchor.week(Weekday::Mon);
                (week.first_day(), week.last_day())
            }
            Self::Month => {
                let first = anchor.with_day(1).unwrap_or(anchor);
                let last = first
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(anchor);
                (first, last)
            }
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Calendar Event
// ============================================================================

/// One content item's slots on one calendar day
///
/// Derived transiently from a fetched batch; regenerated on every refresh
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub content_id: Uuid,
    pub title: String,
    pub content_type: ContentType,
    pub day: NaiveDate,

    /// Slots on this day, posted first, then by time ascending
    pub slots_on_day: Vec<ScheduleSlot>,
}

impl CalendarEvent {
    /// Format as display string
    pub fn display(&self) -> String {
        let slots: Vec<_> = self
            .slots_on_day
            .iter()
            .map(|s| {
                if s.is_posted {
                    format!("{} {} (게시됨)", s.platform.korean_label(), s.time.format("%H:%M"))
                } else {
                    format!("{} {}", s.platform.korean_label(), s.time.format("%H:%M"))
                }
            })
            .collect();

        format!(
            "{} [{}] {} - {}",
            self.day,
            self.content_type.korean_label(),
            self.title,
            slots.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_window() {
        let anchor = d(2025, 2, 14);
        assert_eq!(Granularity::Day.fetch_window(anchor), (anchor, anchor));
    }

    #[test]
    fn test_week_window_is_monday_through_sunday() {
        // 2025-02-14 is a Friday
        let (start, end) = Granularity::Week.fetch_window(d(2025, 2, 14));
        assert_eq!(start, d(2025, 2, 10));
        assert_eq!(end, d(2025, 2, 16));
    }

    #[test]
    fn test_month_window_covers_whole_month() {
        let (start, end) = Granularity::Month.fetch_window(d(2025, 2, 14));
        assert_eq!(start, d(2025, 2, 1));
        assert_eq!(end, d(2025, 2, 28));

        let (start, end) = Granularity::Month.fetch_window(d(2024, 2, 14));
        assert_eq!(end, d(2024, 2, 29));
        assert_eq!(start, d(2024, 2, 1));
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("WEEK"), Some(Granularity::Week));
        assert_eq!(Granularity::parse("주간"), Some(Granularity::Week));
        assert_eq!(Granularity::parse("fortnight"), None);
    }
}
