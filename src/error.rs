//! Unified error handling for the balhaeng crate
//!
//! This module provides a unified error type that consolidates all
//! domain-specific errors into a single `Error` enum, while maintaining
//! the ability to use domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`BalhaengErrorTrait`] - Common interface implemented by the unified type
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! Nothing in this taxonomy is fatal to the surrounding application: every
//! error is recoverable by operator retry or correction.

use std::io;
use thiserror::Error;

// Re-export domain-specific errors for convenience
pub use crate::api::error::ApiError;
pub use crate::cancel::CancelError;
pub use crate::scheduler::error::ScheduleError;

/// Common interface for error handling
///
/// Provides a unified surface for reporting errors to the operator and for
/// deciding whether an action can simply be retried.
pub trait BalhaengErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried unchanged)
    fn is_recoverable(&self) -> bool;

    /// Get localized description for user-facing messages
    fn localized_desc(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout, backend rejection)
    Network,
    /// Draft and selection validation errors
    Validation,
    /// Scheduling workflow errors
    Scheduling,
    /// Configuration errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get localized description for the category
    pub fn localized_desc(&self) -> String {
        match self {
            Self::Network => crate::i18n::t!("errors.category.network").to_string(),
            Self::Validation => crate::i18n::t!("errors.category.validation").to_string(),
            Self::Scheduling => crate::i18n::t!("errors.category.scheduling").to_string(),
            Self::Config => crate::i18n::t!("errors.category.config").to_string(),
            Self::Other => crate::i18n::t!("errors.category.other").to_string(),
        }
    }
}

/// Unified error type for the balhaeng crate
///
/// Wraps all domain-specific errors into a single type usable across
/// module boundaries while preserving the detailed error information.
/// Remote failures keep their workflow (`Submission` vs `Cancellation` vs
/// plain fetch) so the operator notice can name the action that failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Schedule draft validation errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Cancellation selection errors
    #[error("Cancellation error: {0}")]
    Cancel(#[from] CancelError),

    /// A schedule submission failed at the backend
    #[error("Submission failed: {0}")]
    Submission(#[source] ApiError),

    /// A slot cancellation failed at the backend
    #[error("Cancellation failed: {0}")]
    Cancellation(#[source] ApiError),

    /// Backend API errors outside a mutation (fetches, decoding)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BalhaengErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Schedule(e) => e.is_recoverable(),
            Self::Cancel(_) => false,
            Self::Submission(e) | Self::Cancellation(e) | Self::Api(e) => e.is_retryable(),
            Self::Io(_) => true, // I/O errors are often transient
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn localized_desc(&self) -> String {
        match self {
            Self::Schedule(e) => e.localized_desc(),
            Self::Cancel(e) => e.localized_desc(),
            Self::Submission(e) => format!(
                "{}: {}",
                crate::i18n::t!("errors.submission.failed"),
                e.localized_desc()
            ),
            Self::Cancellation(e) => format!(
                "{}: {}",
                crate::i18n::t!("errors.cancellation.failed"),
                e.localized_desc()
            ),
            Self::Api(e) => e.localized_desc(),
            Self::Io(e) => format!("{}: {e}", crate::i18n::t!("errors.io.error")),
            Self::Json(e) => format!("{}: {e}", crate::i18n::t!("errors.json.error")),
            Self::Config(msg) => format!("{}: {msg}", crate::i18n::t!("errors.config.error")),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Schedule(_) | Self::Cancel(_) => ErrorCategory::Validation,
            Self::Submission(ApiError::MutationInFlight { .. })
            | Self::Cancellation(ApiError::MutationInFlight { .. }) => ErrorCategory::Scheduling,
            Self::Submission(_) | Self::Cancellation(_) | Self::Api(_) => ErrorCategory::Network,
            Self::Io(_) => ErrorCategory::Other,
            Self::Json(_) => ErrorCategory::Other,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
