use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use balhaeng::commands;
use balhaeng::config::Config;

#[derive(Parser)]
#[command(
    name = "balhaeng",
    version,
    about = "Editorial publish scheduler for multi-platform newsrooms",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Configuration file path (TOML); environment variables otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the publish calendar for a date range
    Calendar {
        /// Display scale (day, week, month)
        #[arg(short, long, default_value = "week")]
        granularity: String,

        /// Anchor date (YYYY-MM-DD); today if omitted
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Schedule a content item's publication
    Schedule {
        /// Content item id
        content_id: Uuid,

        /// Target platform
        #[arg(short, long)]
        platform: Option<String>,

        /// Apply to every enabled platform
        #[arg(short, long, default_value = "false")]
        all: bool,

        /// Publish date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Publish time (HH:MM, local)
        #[arg(short, long)]
        time: Option<String>,

        /// Copy date/time from another platform's draft
        #[arg(long)]
        same_as: Option<String>,
    },

    /// Cancel upcoming platform slots for a content item
    Cancel {
        /// Content item id
        content_id: Uuid,

        /// Platforms to cancel (repeatable)
        #[arg(short, long)]
        platform: Vec<String>,

        /// Cancel every not-yet-posted slot
        #[arg(short, long, default_value = "false")]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    balhaeng::i18n::init_from_env();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    tracing::info!("balhaeng publish scheduler starting");

    match cli.command {
        Commands::Calendar { granularity, date } => {
            tracing::info!(
                granularity = %granularity,
                date = ?date,
                "Starting calendar command"
            );
            commands::calendar(config, granularity, date).await?;
        }

        Commands::Schedule {
            content_id,
            platform,
            all,
            date,
            time,
            same_as,
        } => {
            tracing::info!(
                content_id = %content_id,
                platform = ?platform,
                all = %all,
                "Starting schedule command"
            );
            commands::schedule(config, content_id, platform, all, date, time, same_as).await?;
        }

        Commands::Cancel {
            content_id,
            platform,
            all,
        } => {
            tracing::info!(
                content_id = %content_id,
                platforms = ?platform,
                all = %all,
                "Starting cancel command"
            );
            commands::cancel(config, content_id, platform, all).await?;
        }
    }

    tracing::info!("balhaeng completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("balhaeng=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("balhaeng=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
