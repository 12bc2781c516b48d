//! balhaeng - Multi-platform editorial publish scheduler
//!
//! A scheduling engine for newsrooms that publish content items (text,
//! audio, video) to a web channel and several social platforms.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`models`] - Core data structures and types
//! - [`scheduler`] - Per-item draft state, validation, and payload building
//! - [`calendar`] - Day-bucketed aggregation and view refresh
//! - [`cancel`] - Cancellation of not-yet-posted slots
//! - [`api`] - Publish backend boundary and HTTP client
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use balhaeng::api::{ClientConfig, HttpBackend, MutationGate, PublishBackend};
//! use balhaeng::config::Config;
//! use balhaeng::scheduler::ScheduleSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let backend = HttpBackend::new(ClientConfig::new(&config.api.base_url))?;
//!     let gate = MutationGate::new();
//!
//!     let item = backend.fetch_content(uuid::Uuid::new_v4()).await?;
//!     let session = ScheduleSession::open(&item, &config.scheduler.platforms);
//!     // edit the session's draft store, then session.submit(&backend, &gate)
//!     Ok(())
//! }
//! ```

// Initialize rust-i18n at crate root level
rust_i18n::i18n!("locales", fallback = "en");

pub mod api;
pub mod calendar;
pub mod cancel;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod scheduler;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{ClientConfig, HttpBackend, MutationGate, PublishBackend};
    pub use crate::calendar::{aggregate_batch, CalendarEvent, CalendarFeed, Granularity, Refresh};
    pub use crate::cancel::CancellationSession;
    pub use crate::config::Config;
    pub use crate::error::{BalhaengErrorTrait, Error, ErrorCategory, Result};
    pub use crate::models::{ContentItem, ContentType, Platform, ScheduleSlot};
    pub use crate::scheduler::{DraftKey, DraftStore, ScheduleSession};
}

// Direct re-exports for convenience
pub use models::{ContentItem, ContentType, Platform, ScheduleSlot};
