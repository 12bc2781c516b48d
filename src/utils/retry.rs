//! Backoff policy for boundary calls
//!
//! The backend client retries transient failures (network errors, 5xx)
//! with exponentially growing delays; permanent failures are returned on
//! the first attempt.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// How often and how patiently a failed call is retried
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub attempts: u32,

    /// Delay before the first retry; doubles on each further one
    pub base_delay: Duration,

    /// Upper bound on any single delay
    pub cap: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_secs(1),
            cap: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Policy with a custom retry count and default delays
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            ..Default::default()
        }
    }

    /// Policy with explicit delays, millisecond precision
    pub fn with_delays(attempts: u32, base_ms: u64, cap_ms: u64) -> Self {
        Self {
            attempts,
            base_delay: Duration::from_millis(base_ms),
            cap: Duration::from_millis(cap_ms),
        }
    }

    /// Delay before the given retry (1-based); doubles per retry up to
    /// the cap
    fn backoff(&self, retry: u32) -> Duration {
        let doubled = self
            .base_delay
            .checked_mul(1u32 << (retry - 1).min(31))
            .unwrap_or(self.cap);
        doubled.min(self.cap)
    }
}

/// Run `operation` until it succeeds, a non-transient error occurs, or
/// the policy's retries are spent
///
/// `is_transient` decides per error whether one more attempt is worth
/// making; the first error it declines is returned unchanged.
pub async fn retry_transient<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    operation: F,
    is_transient: P,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
{
    let mut retry = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if retry > 0 {
                    debug!(retry, "operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) if retry < policy.attempts && is_transient(&e) => {
                retry += 1;
                let delay = policy.backoff(retry);
                warn!(
                    retry,
                    attempts = policy.attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "transient failure, backing off"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
