use anyhow::{Context, Result};
use uuid::Uuid;

use crate::api::{MutationGate, PublishBackend};
use crate::calendar::aggregate_batch;
use crate::config::Config;
use crate::error::BalhaengErrorTrait;
use crate::cancel::CancellationSession;
use crate::i18n::t;
use crate::models::Platform;

use super::backend_from_config;

/// Cancel a subset of an item's upcoming platform slots
pub async fn cancel(
    config: Config,
    content_id: Uuid,
    platforms: Vec<String>,
    all: bool,
) -> Result<()> {
    let backend = backend_from_config(&config)?;
    let gate = MutationGate::new();

    let item = backend
        .fetch_content(content_id)
        .await
        .with_context(|| format!("Failed to fetch content item {content_id}"))?;

    let mut session = CancellationSession::new(item);
    if session.candidates().is_empty() {
        println!("{}", t!("cli.cancel.no_candidates"));
        return Ok(());
    }

    if all {
        session.toggle_all();
    } else {
        for raw in &platforms {
            let platform =
                Platform::parse(raw).with_context(|| format!("Unknown platform: {raw}"))?;
            session
                .select(platform)
                .map_err(|e| anyhow::anyhow!(e.localized_desc()))?;
        }
    }

    match session.confirm(&backend, &gate).await {
        Ok(ack) => {
            println!("{}", t!("cli.cancel.cancelled", count = ack.removed));
        }
        Err(e) => {
            eprintln!("{}", e.localized_desc());
            return Err(e.into());
        }
    }

    // local state is never mutated optimistically; refetch backend truth
    let refreshed = backend
        .fetch_content(content_id)
        .await
        .context("Cancellation applied, but refetching the item failed")?;

    let events = aggregate_batch(&[refreshed]);
    if events.is_empty() {
        println!("{}", t!("cli.cancel.nothing_left"));
    } else {
        println!("{}", t!("cli.cancel.remaining"));
        for event in &events {
            println!("  {}", event.display());
        }
    }

    Ok(())
}
