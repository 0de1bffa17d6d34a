//! Mise - guided recipe walkthrough
//!
//! Main entry point for the Mise application.

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use mise::audio::cue_from_config;
use mise::scenario::{Scenario, ScenarioRunner};
use mise::ui::{MiseApp, Theme};
use mise::{AppConfig, Recipe, Walkthrough};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Step-by-step cooking companion with countdown timers
#[derive(Parser, Debug)]
#[command(name = "mise", version, about)]
struct Args {
    /// Recipe TOML file (defaults to the built-in carbonara)
    #[arg(short, long)]
    recipe: Option<PathBuf>,

    /// Configuration TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a scenario headless and exit with its result
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mise=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = AppConfig::resolve(args.config.as_deref()).context("loading configuration")?;
    let recipe = match &args.recipe {
        Some(path) => Recipe::load(path)
            .with_context(|| format!("loading recipe {}", path.display()))?,
        None => Recipe::carbonara(),
    };

    if let Some(path) = &args.scenario {
        let scenario = Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?;
        let report = ScenarioRunner::new(recipe, config.tick_interval())
            .context("preparing scenario walkthrough")?
            .run(&scenario);
        println!("{}", report.summary());
        for failure in &report.failures {
            println!("  {}", failure);
        }
        std::process::exit(if report.passed() { 0 } else { 1 });
    }

    tracing::info!("Starting Mise with '{}'", recipe.name);

    let cue = cue_from_config(&config.cue);
    let walkthrough =
        Walkthrough::new(recipe, cue, config.tick_interval()).context("starting walkthrough")?;
    let theme = Theme::from_choice(config.theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Mise"),
        ..Default::default()
    };

    eframe::run_native(
        "Mise",
        options,
        Box::new(move |cc| Ok(Box::new(MiseApp::new(cc, walkthrough, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
