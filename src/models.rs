// Core data structures for the balhaeng publish scheduler

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publishing platform enumeration
///
/// The set of platforms is closed for a given deployment; `Config` selects
/// which of them are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
        }
    }

    /// Get Korean name
    pub fn korean_label(&self) -> &'static str {
        match self {
            Self::Web => "웹",
            Self::Instagram => "인스타그램",
            Self::Facebook => "페이스북",
            Self::Twitter => "트위터",
        }
    }

    /// Create from string (supports both English and Korean names)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "web" | "웹" => Some(Self::Web),
            "instagram" | "인스타그램" => Some(Self::Instagram),
            "facebook" | "페이스북" => Some(Self::Facebook),
            "twitter" | "트위터" => Some(Self::Twitter),
            _ => None,
        }
    }

    /// Get all platforms
    pub fn all() -> Vec<Self> {
        vec![Self::Web, Self::Instagram, Self::Facebook, Self::Twitter]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Audio,
    Video,
}

impl ContentType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Get Korean name
    pub fn korean_label(&self) -> &'static str {
        match self {
            Self::Text => "기사",
            Self::Audio => "오디오",
            Self::Video => "영상",
        }
    }

    /// Create from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "기사" => Some(Self::Text),
            "audio" | "오디오" => Some(Self::Audio),
            "video" | "영상" => Some(Self::Video),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One platform's scheduled (or already published) publish time for one
/// content item
///
/// Identity is `(content item, platform)`: an item holds at most one slot per
/// platform. `is_posted` is monotonic; this subsystem never resets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub platform: Platform,
    pub date: NaiveDate,
    /// Local time of day, minute precision
    pub time: NaiveTime,
    pub is_posted: bool,
}

impl ScheduleSlot {
    /// Create a slot that has not been posted yet
    pub fn pending(platform: Platform, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            platform,
            date,
            time,
            is_posted: false,
        }
    }

    /// Combine date and time into the local publish instant
    pub fn publish_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Schedule-relevant view of a content item
///
/// Owned by the backend; this subsystem only reads it and requests slot
/// mutations through the publish API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    pub content_type: ContentType,
    pub slots: Vec<ScheduleSlot>,
}

impl ContentItem {
    /// Create an item with no slots
    pub fn new(id: Uuid, title: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            id,
            title: title.into(),
            content_type,
            slots: Vec::new(),
        }
    }

    /// Get the slot for a platform, if any
    pub fn slot_for(&self, platform: Platform) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.platform == platform)
    }

    /// All slots that have not been posted yet
    pub fn unposted_slots(&self) -> Vec<&ScheduleSlot> {
        self.slots.iter().filter(|s| !s.is_posted).collect()
    }

    /// Platforms whose slot has already been posted
    pub fn posted_platforms(&self) -> Vec<Platform> {
        self.slots
            .iter()
            .filter(|s| s.is_posted)
            .map(|s| s.platform)
            .collect()
    }

    /// Check whether any slot is still awaiting publication
    pub fn has_unposted_slots(&self) -> bool {
        self.slots.iter().any(|s| !s.is_posted)
    }
}
