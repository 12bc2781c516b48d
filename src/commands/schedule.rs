use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::api::{MutationGate, PublishBackend};
use crate::config::Config;
use crate::error::BalhaengErrorTrait;
use crate::i18n::t;
use crate::models::Platform;
use crate::scheduler::{DraftKey, ScheduleError, ScheduleSession};

use super::backend_from_config;

/// Open a scheduling session for one item, apply the requested edit, and
/// submit the result
#[allow(clippy::too_many_arguments)]
pub async fn schedule(
    config: Config,
    content_id: Uuid,
    platform: Option<String>,
    all: bool,
    date: Option<String>,
    time: Option<String>,
    same_as: Option<String>,
) -> Result<()> {
    let backend = backend_from_config(&config)?;
    let gate = MutationGate::new();

    let item = backend
        .fetch_content(content_id)
        .await
        .with_context(|| format!("Failed to fetch content item {content_id}"))?;

    let mut session = ScheduleSession::open(&item, &config.scheduler.platforms);
    if session.store().platforms().is_empty() {
        bail!("{}", ScheduleError::NothingSchedulable.localized_desc());
    }

    let key = if all {
        DraftKey::AllPlatforms
    } else {
        let raw = platform.context("Pass --platform <name> or --all")?;
        let parsed =
            Platform::parse(&raw).with_context(|| format!("Unknown platform: {raw}"))?;
        DraftKey::Platform(parsed)
    };
    session.store_mut().select_primary(key);

    if let Some(source) = same_as {
        let target = key
            .platform()
            .context("--same-as only applies to a single --platform")?;
        let source =
            Platform::parse(&source).with_context(|| format!("Unknown platform: {source}"))?;

        let sources = session.store().offerable_copy_sources();
        if !sources.contains(&source) {
            let offered: Vec<_> = sources.iter().map(|p| p.as_str()).collect();
            bail!(
                "{} has no schedule to copy. Available: {}",
                source,
                offered.join(", ")
            );
        }
        session.store_mut().copy_from(target, source);
    } else {
        if let Some(raw) = date {
            let parsed = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| ScheduleError::invalid_date(&raw))?;
            session.store_mut().set_date(parsed);
        }
        if let Some(raw) = time {
            let parsed = NaiveTime::parse_from_str(&raw, "%H:%M")
                .map_err(|_| ScheduleError::invalid_time(&raw))?;
            session.store_mut().set_time(parsed);
        }
    }

    match session.submit(&backend, &gate).await {
        Ok(ack) => {
            println!(
                "{}",
                t!(
                    "cli.schedule.submitted",
                    count = ack.scheduled,
                    title = session.title()
                )
            );
            Ok(())
        }
        Err(e) => {
            // blocking, non-fatal notice; the draft state was preserved
            eprintln!("{}", e.localized_desc());
            Err(e.into())
        }
    }
}
