//! HTTP client for the publish backend
//!
//! Thin transport layer over the REST backend. Transient failures
//! (network errors, 5xx) are retried with exponential backoff; rejections
//! and malformed payloads are returned immediately. A custom base URL lets
//! tests point the client at a mock server.

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::models::{ContentItem, ContentType, Platform, ScheduleSlot};
use crate::utils::retry::{retry_transient, RetryPolicy};

use super::error::ApiError;
use super::{CancelAck, PublishBackend, SubmitAck};

// ============================================================================
// Client Configuration
// ============================================================================

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Retry policy for transient failures
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Generic API response envelope from the backend
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Slot as it travels over the wire
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotDto {
    pub platform: String,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Local time of day, HH:MM
    pub time: String,
    pub is_posted: bool,
}

impl SlotDto {
    fn from_model(slot: &ScheduleSlot) -> Self {
        Self {
            platform: slot.platform.as_str().to_string(),
            date: slot.date.format("%Y-%m-%d").to_string(),
            time: slot.time.format("%H:%M").to_string(),
            is_posted: slot.is_posted,
        }
    }

    fn into_model(self) -> Result<ScheduleSlot, ApiError> {
        let platform = Platform::parse(&self.platform)
            .ok_or_else(|| ApiError::Decode(format!("unknown platform '{}'", self.platform)))?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| ApiError::Decode(format!("bad date '{}': {e}", self.date)))?;
        let time = chrono::NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|e| ApiError::Decode(format!("bad time '{}': {e}", self.time)))?;

        Ok(ScheduleSlot {
            platform,
            date,
            time,
            is_posted: self.is_posted,
        })
    }
}

/// Content item as it travels over the wire
#[derive(Debug, Deserialize)]
pub struct ContentItemDto {
    pub id: Uuid,
    pub title: String,
    pub content_type: String,
    #[serde(default)]
    pub slots: Vec<SlotDto>,
}

impl ContentItemDto {
    fn into_model(self) -> Result<ContentItem, ApiError> {
        let content_type = ContentType::parse(&self.content_type).ok_or_else(|| {
            ApiError::Decode(format!("unknown content type '{}'", self.content_type))
        })?;

        let slots = self
            .slots
            .into_iter()
            .map(SlotDto::into_model)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ContentItem {
            id: self.id,
            title: self.title,
            content_type,
            slots,
        })
    }
}

#[derive(Debug, Serialize)]
struct SubmitRequest {
    slots: Vec<SlotDto>,
    is_reschedule: bool,
}

#[derive(Debug, Serialize)]
struct CancelRequest {
    platforms: Vec<String>,
}

// ============================================================================
// HTTP Backend
// ============================================================================

/// Production [`PublishBackend`] talking to the REST backend
pub struct HttpBackend {
    config: ClientConfig,
    http_client: Client,
}

impl HttpBackend {
    /// Create a new backend client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` when the base URL does not parse and
    /// `ApiError::Http` when the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a request, retrying transient failures, and unwrap the envelope
    async fn send_json<T: DeserializeOwned>(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        retry_transient(
            &self.config.retry,
            || async {
                let response = build().send().await?;
                Self::decode_response(response).await
            },
            ApiError::is_retryable,
        )
        .await
    }

    async fn decode_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_server_error() {
            return Err(ApiError::ServerError(status.as_u16()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: envelope
                    .error
                    .unwrap_or_else(|| "unspecified backend error".to_string()),
            });
        }

        envelope
            .data
            .ok_or_else(|| ApiError::Decode("response envelope has no data".to_string()))
    }
}

#[async_trait::async_trait]
impl PublishBackend for HttpBackend {
    async fn fetch_batch(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<ContentItem>, ApiError> {
        let url = self.endpoint("/api/contents");
        let from = range_start.format("%Y-%m-%d").to_string();
        let to = range_end.format("%Y-%m-%d").to_string();

        let dtos: Vec<ContentItemDto> = self
            .send_json(|| {
                self.http_client
                    .get(&url)
                    .query(&[("from", from.as_str()), ("to", to.as_str())])
            })
            .await?;

        dtos.into_iter().map(ContentItemDto::into_model).collect()
    }

    async fn fetch_content(&self, content_id: Uuid) -> Result<ContentItem, ApiError> {
        let url = self.endpoint(&format!("/api/contents/{content_id}"));
        let dto: ContentItemDto = self.send_json(|| self.http_client.get(&url)).await?;
        dto.into_model()
    }

    async fn submit_schedule(
        &self,
        content_id: Uuid,
        slots: &[ScheduleSlot],
        is_reschedule: bool,
    ) -> Result<SubmitAck, ApiError> {
        let url = self.endpoint(&format!("/api/contents/{content_id}/schedule"));
        let request = SubmitRequest {
            slots: slots.iter().map(SlotDto::from_model).collect(),
            is_reschedule,
        };

        self.send_json(|| self.http_client.post(&url).json(&request))
            .await
    }

    async fn cancel_slots(
        &self,
        content_id: Uuid,
        platforms: &[Platform],
    ) -> Result<CancelAck, ApiError> {
        let url = self.endpoint(&format!("/api/contents/{content_id}/slots/cancel"));
        let request = CancelRequest {
            platforms: platforms.iter().map(|p| p.as_str().to_string()).collect(),
        };

        self.send_json(|| self.http_client.post(&url).json(&request))
            .await
    }
}
