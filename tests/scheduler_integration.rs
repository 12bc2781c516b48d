//! End-to-end tests for the scheduling and cancellation workflows
//!
//! These tests drive the complete operator flows against a mock backend:
//! - fetch an item, edit its drafts, submit a schedule
//! - reschedule with existing slots
//! - per-item mutual exclusion while a mutation is in flight
//! - cancellation with local rejection of posted slots and refetch after
//! - last-request-wins refresh for calendar fetches

mod common;

use balhaeng::api::{ApiError, ClientConfig, HttpBackend, MutationGate, PublishBackend};
use balhaeng::calendar::{aggregate_batch, CalendarFeed, Granularity, Refresh};
use balhaeng::cancel::{CancelError, CancellationSession};
use balhaeng::error::Error;
use balhaeng::models::Platform;
use balhaeng::scheduler::{DraftKey, ScheduleSession};
use balhaeng::utils::retry::RetryPolicy;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpBackend {
    HttpBackend::new(
        ClientConfig::new(server.uri())
            .with_timeout(Duration::from_secs(2))
            .with_retry(RetryPolicy::with_delays(0, 1, 10)),
    )
    .unwrap()
}

/// A far-future publish date so the validator's futurity check passes
fn future_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
}

// ============================================================================
// Submission Workflow
// ============================================================================

#[tokio::test]
async fn test_first_schedule_round_trip() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/contents/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(common::item_json(id, "새 기사", vec![]))),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/contents/{id}/schedule")))
        .and(body_partial_json(json!({"is_reschedule": false})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(json!({"content_id": id, "scheduled": 4}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = client(&server);
    let gate = MutationGate::new();

    let item = backend.fetch_content(id).await.unwrap();
    let mut session = ScheduleSession::open(&item, &Platform::all());
    assert!(!session.is_reschedule());

    session.store_mut().select_primary(DraftKey::AllPlatforms);
    session
        .store_mut()
        .set_date_time(future_date(), common::time(9, 0));

    let ack = session.submit(&backend, &gate).await.unwrap();
    assert_eq!(ack.scheduled, 4);
}

#[tokio::test]
async fn test_reschedule_replaces_unposted_slots() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    let item_body = common::item_json(
        id,
        "기존 예약 기사",
        vec![
            common::slot_json("web", "2099-12-01", "08:00", false),
            common::slot_json("instagram", "2099-12-01", "08:00", false),
        ],
    );

    Mock::given(method("GET"))
        .and(path(format!("/api/contents/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(item_body)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/contents/{id}/schedule")))
        .and(body_partial_json(json!({"is_reschedule": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(json!({"content_id": id, "scheduled": 2}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = client(&server);
    let gate = MutationGate::new();

    let item = backend.fetch_content(id).await.unwrap();
    let mut session = ScheduleSession::open(&item, &Platform::all());
    assert!(session.is_reschedule());

    // both existing slots share one value, so the shorthand is pre-filled;
    // push the whole schedule one hour later
    session.store_mut().select_primary(DraftKey::AllPlatforms);
    session
        .store_mut()
        .set_date_time(future_date(), common::time(9, 0));

    let ack = session.submit(&backend, &gate).await.unwrap();
    assert_eq!(ack.scheduled, 2);
}

#[tokio::test]
async fn test_second_submission_blocked_while_first_in_flight() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/contents/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(common::item_json(id, "기사", vec![]))),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/contents/{id}/schedule")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(json!({"content_id": id, "scheduled": 4})))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let backend = Arc::new(client(&server));
    let gate = MutationGate::new();

    let item = backend.fetch_content(id).await.unwrap();

    let mut first = ScheduleSession::open(&item, &Platform::all());
    first
        .store_mut()
        .set_date_time(future_date(), common::time(9, 0));

    let mut second = ScheduleSession::open(&item, &Platform::all());
    second
        .store_mut()
        .set_date_time(future_date(), common::time(10, 0));

    let in_flight = {
        let backend = Arc::clone(&backend);
        let gate = gate.clone();
        tokio::spawn(async move { first.submit(&*backend, &gate).await })
    };

    // let the first submission reach the wire, then try to race it
    tokio::time::sleep(Duration::from_millis(50)).await;
    let err = second.submit(&*backend, &gate).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Submission(ApiError::MutationInFlight { .. })
    ));

    // the first submission completes normally and releases the gate
    let ack = in_flight.await.unwrap().unwrap();
    assert_eq!(ack.scheduled, 4);
    assert!(!gate.is_busy(id));
}

// ============================================================================
// Cancellation Workflow
// ============================================================================

#[tokio::test]
async fn test_cancel_selected_slots_then_refetch() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    let before = common::item_json(
        id,
        "저녁 뉴스",
        vec![
            common::slot_json("web", "2025-02-01", "08:00", true),
            common::slot_json("instagram", "2025-02-01", "09:00", false),
            common::slot_json("twitter", "2025-02-02", "10:00", false),
        ],
    );
    let after = common::item_json(
        id,
        "저녁 뉴스",
        vec![
            common::slot_json("web", "2025-02-01", "08:00", true),
            common::slot_json("twitter", "2025-02-02", "10:00", false),
        ],
    );

    Mock::given(method("GET"))
        .and(path(format!("/api/contents/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(before)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/contents/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(after)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/contents/{id}/slots/cancel")))
        .and(body_partial_json(json!({"platforms": ["instagram"]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(json!({"content_id": id, "removed": 1}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = client(&server);
    let gate = MutationGate::new();

    let item = backend.fetch_content(id).await.unwrap();
    let mut session = CancellationSession::new(item);

    // posted slots are never candidates and are rejected before any
    // request is made
    let candidates: Vec<_> = session.candidates().iter().map(|s| s.platform).collect();
    assert_eq!(candidates, vec![Platform::Instagram, Platform::Twitter]);
    assert_eq!(
        session.select(Platform::Web),
        Err(CancelError::AlreadyPosted {
            platform: Platform::Web
        })
    );

    session.select(Platform::Instagram).unwrap();
    let ack = session.confirm(&backend, &gate).await.unwrap();
    assert_eq!(ack.removed, 1);

    // the session never mutates local slots; backend truth comes from a
    // refetch
    assert_eq!(session.candidates().len(), 2);
    let refreshed = backend.fetch_content(id).await.unwrap();
    let events = aggregate_batch(&[refreshed]);
    let platforms: Vec<_> = events
        .iter()
        .flat_map(|e| e.slots_on_day.iter().map(|s| s.platform))
        .collect();
    assert_eq!(platforms, vec![Platform::Web, Platform::Twitter]);
}

// ============================================================================
// Calendar Refresh
// ============================================================================

#[tokio::test]
async fn test_superseded_fetch_never_overwrites_newer_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/contents"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::envelope(json!([])))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;

    let feed = CalendarFeed::new(Arc::new(client(&server)));
    let anchor = common::date(2, 1);

    let slow = {
        let feed = feed.clone();
        tokio::spawn(async move { feed.refresh(Granularity::Month, anchor).await })
    };

    tokio::time::sleep(Duration::from_millis(30)).await;
    let fresh = feed.refresh(Granularity::Day, anchor).await.unwrap();
    assert!(matches!(fresh, Refresh::Events(_)));

    let stale = slow.await.unwrap().unwrap();
    assert_eq!(stale, Refresh::Superseded);
}
