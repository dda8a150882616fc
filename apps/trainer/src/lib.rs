pub mod cli;
pub mod config;
pub mod db;
pub mod services;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::algorithm::IntervalLadder;
use vocab_core::clock::{Clock, SystemClock};
use vocab_core::types::{Direction, ItemKind};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::db::{SqliteRepository, UserRepository};
use crate::services::{AccountService, StudyService};

/// Parse the command line and run it.
pub fn run() -> anyhow::Result<()> {
    run_with(Cli::parse())
}

/// Open the database, run `cli`'s command, and report what is due today.
pub fn run_with(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Opening database at {}", config.database_path.display());
    let repository = SqliteRepository::open(&config.database_path)?;

    if let Command::Register { names } = cli.action() {
        let accounts = AccountService::new(&repository, &config.default_intervals);
        for name in names {
            let user = accounts.register(name)?;
            tracing::info!(user_id = user.id, name = %user.name, "registered user");
        }
    }

    if cli.prune || config.prune_unused_intervals {
        services::prune_unused_intervals(&repository)?;
    }

    let clock = SystemClock::new(config.daily_reset_hour);
    let algorithm = IntervalLadder::new(config.forgotten_policy);
    let study = StudyService::new(&repository, &clock, &algorithm);

    let user_ids = repository.list_user_ids()?;
    tracing::info!(
        "Study date {} ({} users, failed repetitions: {})",
        clock.today(),
        user_ids.len(),
        config.forgotten_policy.as_str()
    );
    for user_id in user_ids {
        for direction in Direction::ALL {
            tracing::info!(
                user_id,
                direction = direction.as_str(),
                words = study.count_due(ItemKind::Word, user_id, direction)?,
                expressions = study.count_due(ItemKind::Expression, user_id, direction)?,
                "due for repetition"
            );
        }
    }

    Ok(())
}
