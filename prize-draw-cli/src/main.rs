//! One-shot prize draw.
//!
//! Configuration comes from `prize-draw.toml` merged with `PRIZE_DRAW_`
//! environment variables. The binary reads the pool, the optional rule file
//! and the optional already-won file, runs one draw and prints the winners
//! on stdout, one `uid<TAB>name` line each.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use figment::providers::{Env, Format as _, Toml};
use figment::Figment;
use prize_draw_core::{sample_with_appointments, Participant};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct Config {
    /// JSON array of participants.
    pool: PathBuf,
    count: usize,
    prize_id: Option<String>,
    rules: Option<PathBuf>,
    already_won: Option<PathBuf>,
}

fn get_config() -> Result<Config, figment::Error> {
    Figment::new()
        .merge(Toml::file("prize-draw.toml"))
        .merge(Env::prefixed("PRIZE_DRAW_"))
        .extract()
}

async fn read_participants(path: &Path) -> anyhow::Result<Vec<Participant>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a JSON array of participants", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = get_config()?;
    let pool = read_participants(&config.pool).await?;
    let already_won = match &config.already_won {
        Some(path) => read_participants(path).await?,
        None => Vec::new(),
    };
    // Rule loading is fail-open: a missing or broken rule file downgrades
    // the draw to an unconstrained one.
    let rules = match &config.rules {
        Some(path) => prize_draw_rules::load_rules_or_default(path).await,
        None => Vec::new(),
    };
    debug!(
        "{} in pool, {} rules, {} previous winners",
        pool.len(),
        rules.len(),
        already_won.len()
    );

    let winners = sample_with_appointments(
        &pool,
        config.count,
        config.prize_id.as_deref(),
        &rules,
        &already_won,
    )?;
    info!("drew {} of {} requested winners", winners.len(), config.count);
    for winner in &winners {
        println!("{}\t{}", winner.uid.as_deref().unwrap_or("-"), winner.name);
    }
    Ok(())
}
