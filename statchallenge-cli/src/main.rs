//! Terminal front-end for the hidden stat challenge

use anyhow::{Context, Result};
use clap::Parser;
use engine_core::SeededDraw;
use games_statchallenge::{Catalog, Generation, RoundEngine};
use std::io;
use std::sync::Arc;
use tracing::info;

mod config;
mod console;

use crate::config::Config;

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing; stdout belongs to the game
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .with_writer(io::stderr)
        .init();

    let catalog = match &config.catalog {
        Some(path) => Arc::new(
            Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        ),
        None => Catalog::builtin(),
    };
    info!(creatures = catalog.len(), "Catalog ready");

    let source = match config.seed {
        Some(seed) => {
            info!(seed, "Using seeded draws");
            SeededDraw::from_seed(seed)
        }
        None => SeededDraw::from_entropy(),
    };

    let mut engine = RoundEngine::new(catalog, source);
    let generation = Generation::resolve(&config.generation);
    engine.select_generation(generation);
    if let Some(target) = &config.target {
        engine.start(target, generation);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(&mut engine, stdin.lock(), &mut stdout)
}
