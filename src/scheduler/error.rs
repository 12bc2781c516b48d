//! Error types for the scheduler module

use chrono::NaiveDateTime;
use std::fmt;

/// Result type for scheduler operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Scheduler-specific errors
///
/// Validation failures are blocking but non-fatal: the draft is left
/// untouched so the operator can correct it and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Draft is missing a date, a time, or both
    IncompleteSchedule {
        missing: String,
    },

    /// Scheduled instant is not strictly in the future
    PastSchedule {
        scheduled_for: NaiveDateTime,
    },

    /// Date string could not be parsed (expected YYYY-MM-DD)
    InvalidDate {
        value: String,
    },

    /// Time string could not be parsed (expected HH:MM)
    InvalidTime {
        value: String,
    },

    /// No platform on this item can currently be scheduled
    NothingSchedulable,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteSchedule { missing } => {
                write!(f, "Schedule is incomplete: missing {}", missing)
            }
            Self::PastSchedule { scheduled_for } => {
                write!(
                    f,
                    "Scheduled instant {} is not in the future",
                    scheduled_for.format("%Y-%m-%d %H:%M")
                )
            }
            Self::InvalidDate { value } => {
                write!(f, "Invalid date '{}'. Expected YYYY-MM-DD", value)
            }
            Self::InvalidTime { value } => {
                write!(f, "Invalid time '{}'. Expected HH:MM", value)
            }
            Self::NothingSchedulable => {
                write!(f, "Every platform on this item has already been posted")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl ScheduleError {
    /// Create an incomplete schedule error
    pub fn incomplete(missing: impl Into<String>) -> Self {
        Self::IncompleteSchedule {
            missing: missing.into(),
        }
    }

    /// Create a past schedule error
    pub fn past(scheduled_for: NaiveDateTime) -> Self {
        Self::PastSchedule { scheduled_for }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Create an invalid time error
    pub fn invalid_time(value: impl Into<String>) -> Self {
        Self::InvalidTime {
            value: value.into(),
        }
    }

    /// Get localized description for operator-facing notices
    pub fn localized_desc(&self) -> String {
        match self {
            Self::IncompleteSchedule { missing } => {
                crate::i18n::t!("errors.schedule.incomplete", missing = missing).to_string()
            }
            Self::PastSchedule { scheduled_for } => crate::i18n::t!(
                "errors.schedule.past",
                instant = scheduled_for.format("%Y-%m-%d %H:%M").to_string()
            )
            .to_string(),
            Self::InvalidDate { value } => {
                crate::i18n::t!("errors.schedule.invalid_date", value = value).to_string()
            }
            Self::InvalidTime { value } => {
                crate::i18n::t!("errors.schedule.invalid_time", value = value).to_string()
            }
            Self::NothingSchedulable => {
                crate::i18n::t!("errors.schedule.nothing_schedulable").to_string()
            }
        }
    }

    /// Check if the error is recoverable by retrying unchanged
    ///
    /// Validation errors always require the operator to correct the draft
    /// first, so none of them are retryable as-is.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
