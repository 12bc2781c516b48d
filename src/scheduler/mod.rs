//! Multi-platform publish scheduling
//!
//! This module holds the working state and rules that turn an operator's
//! per-platform date/time edits into a canonical schedule submission.
//!
//! # Overview
//!
//! An operator opens the scheduler for one content item; a
//! [`ScheduleSession`] seeds a [`DraftStore`] from the item's existing
//! slots. The operator edits entries per platform, or through the
//! "all platforms" shorthand, until the validator lets the submission
//! through and the payload builder reduces the drafts to the final slot
//! list.
//!
//! ```text
//! ┌──────────────┐   edits    ┌──────────────┐
//! │   operator   │──────────▶│  DraftStore   │
//! └──────────────┘            └──────┬───────┘
//!        │ submit                    │
//!        ▼                           ▼
//! ┌──────────────┐  gates  ┌──────────────────┐  slots  ┌─────────────┐
//! │  validator   │────────▶│  payload builder  │───────▶│   backend   │
//! └──────────────┘         └──────────────────┘         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`draft`] - Draft keys, entries, and the per-item draft store
//! - [`validate`] - Completeness and futurity gate before submission
//! - [`payload`] - Reduction of drafts into the canonical slot list
//! - [`session`] - Per-item session tying the pieces to the backend
//! - [`error`] - Scheduler error types
//!
//! # Quick Start
//!
//! ```ignore
//! use balhaeng::models::Platform;
//! use balhaeng::scheduler::{DraftKey, ScheduleSession};
//!
//! let mut session = ScheduleSession::open(&item, &Platform::all());
//! let store = session.store_mut();
//!
//! // schedule every platform at once
//! store.select_primary(DraftKey::AllPlatforms);
//! store.set_date_time(date, time);
//!
//! // then give twitter its own slot
//! store.select_primary(DraftKey::Platform(Platform::Twitter));
//! store.set_date_time(other_date, other_time);
//!
//! let ack = session.submit(&backend, &gate).await?;
//! ```
//!
//! All draft operations are synchronous, infallible state transitions;
//! only the final submission touches the network.

pub mod draft;
pub mod error;
pub mod payload;
pub mod session;
pub mod validate;

// Re-export main types
pub use draft::{DraftEntry, DraftKey, DraftStore};
pub use error::{ScheduleError, ScheduleResult};
pub use payload::{build_slots, SchedulePayload};
pub use session::ScheduleSession;
pub use validate::validate_entry;
