//! Combination Engine Binary
//!
//! Classifies a JSON array of legs against the combination catalog and
//! prints the resulting classification as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin combination-engine -- legs.json
//! ```
//!
//! Each leg has the form
//! `{"type": "call", "ratio": "1", "strike": "100", "expiration": "2024-01-19"}`.
//!
//! # Environment Variables
//!
//! - `COMBINATION_ENGINE_CONFIG`: Config file path (default: config.yaml)
//! - `COMBINATION_CATALOG`: Catalog path, when referenced by the config
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use combination_engine::config::load_config;
use combination_engine::telemetry::init_tracing;
use combination_engine::{Catalog, Leg, Matcher};

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "COMBINATION_ENGINE_CONFIG";

/// Default config file path.
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

fn main() -> Result<()> {
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config(Some(&config_path))
        .with_context(|| format!("loading config from {config_path}"))?;

    init_tracing(&config.observability.logging)?;

    tracing::info!(
        config = %config_path,
        catalog = %config.catalog.path,
        max_permuted_legs = config.matcher.max_permuted_legs,
        "Starting combination engine"
    );

    let Some(legs_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: combination-engine <legs.json>");
    };

    let catalog = Catalog::load(&config.catalog.path)
        .with_context(|| format!("loading catalog from {}", config.catalog.path))?;
    let matcher = Matcher::new(catalog).with_max_permuted_legs(config.matcher.max_permuted_legs);

    let contents = std::fs::read_to_string(&legs_path)
        .with_context(|| format!("reading legs from {}", legs_path.display()))?;
    let legs: Vec<Leg> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing legs from {}", legs_path.display()))?;

    let classification = matcher.classify(&legs);
    tracing::info!(
        legs = legs.len(),
        name = %classification.name,
        "Classification complete"
    );

    println!("{}", serde_json::to_string_pretty(&classification)?);
    Ok(())
}
