pub mod calendar;
pub mod cancel;
pub mod schedule;

// Re-export command functions for convenience
pub use calendar::calendar;
pub use cancel::cancel;
pub use schedule::schedule;

use anyhow::Result;

use crate::api::{ClientConfig, HttpBackend};
use crate::config::Config;
use crate::utils::retry::RetryPolicy;

/// Build the HTTP backend described by the configuration
pub(crate) fn backend_from_config(config: &Config) -> Result<HttpBackend> {
    let client_config = ClientConfig::new(&config.api.base_url)
        .with_timeout(config.request_timeout())
        .with_retry(RetryPolicy::new(config.api.max_retries));

    Ok(HttpBackend::new(client_config)?)
}
