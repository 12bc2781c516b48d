//! Submission gate for schedule drafts
//!
//! A draft may hold partial input while the operator is editing; this gate
//! is the single place that enforces completeness and strict futurity
//! before anything is sent to the backend. Failure leaves the draft
//! untouched so the operator can correct it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::draft::DraftEntry;
use super::error::{ScheduleError, ScheduleResult};

/// Validate a draft entry against a reference instant
///
/// `now` is the operator's local wall clock; the scheduled instant must be
/// strictly after it. Returns the completed pair on success.
///
/// # Errors
///
/// Returns `ScheduleError::IncompleteSchedule` when a field is missing and
/// `ScheduleError::PastSchedule` when the instant is not in the future.
pub fn validate_entry(
    entry: DraftEntry,
    now: NaiveDateTime,
) -> ScheduleResult<(NaiveDate, NaiveTime)> {
    let (date, time) = match (entry.date, entry.time) {
        (Some(date), Some(time)) => (date, time),
        (Some(_), None) => return Err(ScheduleError::incomplete("time")),
        (None, Some(_)) => return Err(ScheduleError::incomplete("date")),
        (None, None) => return Err(ScheduleError::incomplete("date and time")),
    };

    let scheduled_for = date.and_time(time);
    if scheduled_for <= now {
        return Err(ScheduleError::past(scheduled_for));
    }

    Ok((date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: Option<(i32, u32, u32)>, time: Option<(u32, u32)>) -> DraftEntry {
        DraftEntry {
            date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        }
    }

    fn noon_2025_02_01() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_missing_time() {
        let err = validate_entry(entry(Some((2025, 3, 1)), None), noon_2025_02_01()).unwrap_err();
        assert_eq!(err, ScheduleError::incomplete("time"));
    }

    #[test]
    fn test_missing_date() {
        let err = validate_entry(entry(None, Some((10, 0))), noon_2025_02_01()).unwrap_err();
        assert_eq!(err, ScheduleError::incomplete("date"));
    }

    #[test]
    fn test_missing_both() {
        let err = validate_entry(entry(None, None), noon_2025_02_01()).unwrap_err();
        assert_eq!(err, ScheduleError::incomplete("date and time"));
    }

    #[test]
    fn test_past_instant_rejected() {
        let err = validate_entry(
            entry(Some((2020, 1, 1)), Some((10, 0))),
            noon_2025_02_01(),
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::PastSchedule { .. }));
    }

    #[test]
    fn test_exact_now_rejected() {
        // strictly greater than now, not equal
        let err = validate_entry(
            entry(Some((2025, 2, 1)), Some((12, 0))),
            noon_2025_02_01(),
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::PastSchedule { .. }));
    }

    #[test]
    fn test_future_instant_accepted() {
        let (date, time) = validate_entry(
            entry(Some((2025, 2, 1)), Some((12, 1))),
            noon_2025_02_01(),
        )
        .unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(12, 1, 0).unwrap());
    }
}
