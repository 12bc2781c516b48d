//! Calendar aggregation and refresh
//!
//! Converts flat per-platform schedule slots into day-bucketed events for
//! calendar views, and owns the refresh policy that keeps a view
//! consistent when fetches resolve out of order.
//!
//! # Modules
//!
//! - [`event`] - `CalendarEvent` and `Granularity` with fetch windows
//! - [`aggregate`] - deterministic day bucketing
//! - [`feed`] - last-request-wins refresh over the backend
//!
//! Aggregation itself is pure and synchronous; only the feed touches the
//! network.

pub mod aggregate;
pub mod event;
pub mod feed;

// Re-export main types
pub use aggregate::aggregate_batch;
pub use event::{CalendarEvent, Granularity};
pub use feed::{CalendarFeed, Refresh};
