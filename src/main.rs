//! Road Rush entry point
//!
//! The native build is headless: an autopilot drives, the renderer logs the
//! HUD, and scripted screens restart until the run budget is spent.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use road_rush::app::{HeadlessGameOver, HeadlessMenu, RunBudget};
use road_rush::assets::AssetSet;
use road_rush::audio::{AudioManager, LogAudio};
use road_rush::platform::{Autopilot, FixedRate, LogRenderer, Pacer, Unpaced};
use road_rush::session::Platform;
use road_rush::{App, Config};

#[derive(Debug, Parser)]
#[command(name = "road-rush", version, about = "Dodge oncoming traffic on an endless road")]
struct Cli {
    /// JSON config file (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding images/*.png
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Sessions to play before quitting
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Per-session tick limit for the autopilot
    #[arg(long, default_value_t = 3600)]
    max_ticks: u64,

    /// Run ticks back to back instead of at the configured tick rate
    #[arg(long)]
    unpaced: bool,

    /// Run without sound
    #[arg(long)]
    mute: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            log::info!("Using default config");
            Config::default()
        }
    };

    if cli.print_config {
        let json = serde_json::to_string_pretty(&config).context("failed to encode config")?;
        println!("{json}");
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("Road Rush starting (seed {seed})");

    let mut audio = AudioManager::new(Some(Box::new(LogAudio::new())));
    audio.set_muted(cli.mute);
    if !audio.is_available() {
        log::info!("Sound muted");
    }
    let pacer: Box<dyn Pacer> = if cli.unpaced {
        Box::new(Unpaced)
    } else {
        Box::new(FixedRate::new(config.tick_period()))
    };

    let platform = Platform {
        input: Box::new(Autopilot::new(config.clone(), cli.max_ticks)),
        renderer: Box::new(LogRenderer::new(config.tick_rate as u64)),
        pacer,
        audio,
        assets: AssetSet::load(&cli.assets),
    };

    let budget = RunBudget::new(cli.runs);
    let mut app = App::new(
        config,
        platform,
        Box::new(HeadlessMenu::new(budget.clone())),
        Box::new(HeadlessGameOver::new(budget)),
        seed,
    )?;
    app.run();

    if let Some(report) = app.last_report() {
        log::info!("Final score: {} ({:?})", report.score, report.exit);
    }
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
