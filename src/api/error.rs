//! Error types for the publish API boundary

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while talking to the publish backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Backend refused the request (e.g. cancelling a posted slot)
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded into model types
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid backend URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A submission or cancellation for this item is already in flight
    #[error("A mutation for content item {content_id} is already in flight")]
    MutationInFlight { content_id: Uuid },
}

impl ApiError {
    /// Check if retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::ServerError(_) => true,
            Self::Rejected { .. }
            | Self::Decode(_)
            | Self::InvalidUrl(_)
            | Self::MutationInFlight { .. } => false,
        }
    }

    /// Get localized description for operator-facing notices
    pub fn localized_desc(&self) -> String {
        match self {
            Self::Http(e) => format!("{}: {e}", crate::i18n::t!("errors.api.http")),
            Self::ServerError(status) => {
                crate::i18n::t!("errors.api.server", status = status).to_string()
            }
            Self::Rejected { message, .. } => {
                crate::i18n::t!("errors.api.rejected", message = message).to_string()
            }
            Self::Decode(msg) => format!("{}: {msg}", crate::i18n::t!("errors.api.decode")),
            Self::InvalidUrl(url) => {
                crate::i18n::t!("errors.api.invalid_url", url = url).to_string()
            }
            Self::MutationInFlight { .. } => {
                crate::i18n::t!("errors.api.mutation_in_flight").to_string()
            }
        }
    }
}
