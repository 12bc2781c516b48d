//! Calendar feed with last-request-wins refresh
//!
//! A calendar view refetches whenever the operator moves the visible range
//! or switches granularity. Responses can arrive out of order, so each
//! refresh takes a ticket from a request-generation counter; a response
//! whose ticket is no longer current is discarded, success or failure,
//! before it can overwrite state produced by a newer request. Ordering is
//! "last request issued wins", never "last response received wins".

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api::PublishBackend;
use crate::error::Result;

use super::aggregate::aggregate_batch;
use super::event::{CalendarEvent, Granularity};

/// Outcome of one refresh request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// Fresh events for the requested range
    Events(Vec<CalendarEvent>),

    /// A newer refresh was issued while this one was in flight; the
    /// response was discarded and nothing should change
    Superseded,
}

/// Fetches date ranges from the backend and aggregates them into events
pub struct CalendarFeed<B> {
    backend: Arc<B>,
    generation: Arc<AtomicU64>,
}

impl<B> Clone for CalendarFeed<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<B: PublishBackend> CalendarFeed<B> {
    /// Create a feed over a backend
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Fetch the window for `anchor` at `granularity` and aggregate it
    ///
    /// Returns [`Refresh::Superseded`] when another refresh was issued
    /// after this one; a superseded response is never surfaced, even when
    /// the fetch itself failed.
    pub async fn refresh(&self, granularity: Granularity, anchor: NaiveDate) -> Result<Refresh> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (range_start, range_end) = granularity.fetch_window(anchor);

        tracing::debug!(
            granularity = %granularity,
            range_start = %range_start,
            range_end = %range_end,
            ticket,
            "fetching calendar batch"
        );

        let result = self.backend.fetch_batch(range_start, range_end).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding stale calendar response");
            return Ok(Refresh::Superseded);
        }

        let items = result?;
        Ok(Refresh::Events(aggregate_batch(&items)))
    }
}
