use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::calendar::{CalendarFeed, Granularity, Refresh};
use crate::config::Config;
use crate::i18n::t;
use crate::utils::truncate_text;

use super::backend_from_config;

/// Render the publish calendar for a date range
pub async fn calendar(config: Config, granularity: String, date: Option<String>) -> Result<()> {
    let granularity = Granularity::parse(&granularity)
        .with_context(|| format!("Unknown granularity: {granularity}"))?;

    let anchor = match date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {raw}"))?,
        None => Local::now().date_naive(),
    };

    let backend = backend_from_config(&config)?;
    let feed = CalendarFeed::new(Arc::new(backend));

    let (range_start, range_end) = granularity.fetch_window(anchor);
    println!(
        "{}",
        t!(
            "cli.calendar.fetching",
            from = range_start.to_string(),
            to = range_end.to_string()
        )
    );

    match feed.refresh(granularity, anchor).await? {
        Refresh::Events(events) => {
            if events.is_empty() {
                println!("{}", t!("cli.calendar.empty"));
                return Ok(());
            }

            let mut current_day = None;
            for event in &events {
                if current_day != Some(event.day) {
                    println!("\n{} ({})", event.day, granularity.korean_label());
                    current_day = Some(event.day);
                }
                println!("  {}", truncate_text(&event.display(), 120));
            }
        }
        Refresh::Superseded => {
            // a one-shot CLI fetch cannot be superseded
            tracing::debug!("calendar refresh superseded");
        }
    }

    Ok(())
}
