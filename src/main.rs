use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use power_snake::game::GameConfig;
use power_snake::logging::{self, LogTarget};
use power_snake::modes::{AutoplayConfig, AutoplayMode, HumanMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "power_snake")]
#[command(version, about = "Snake with enemies, lives and power-ups")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file overriding rule values (timings, points, lives, enemies)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for spawns and enemy movement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play in autoplay mode
    #[arg(long, default_value = "20")]
    games: usize,

    /// Tick cap per game in autoplay mode
    #[arg(long, default_value = "2000")]
    max_ticks: u64,

    /// Write logs to this file (human mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with the keyboard in the terminal
    Human,
    /// Let a random player run headless games and print a JSON report
    Autoplay,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, &cli.mode) {
        (Some(path), _) => LogTarget::File(path),
        (None, Mode::Autoplay) => LogTarget::Stderr,
        (None, Mode::Human) => LogTarget::Off,
    };
    logging::init(log_target)?;

    let config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.seed)?;
            human_mode.run().await?;
        }
        Mode::Autoplay => {
            let autoplay_config = AutoplayConfig {
                max_ticks: cli.max_ticks,
                game_config: config,
                ..AutoplayConfig::new(cli.games, cli.seed.unwrap_or_else(rand::random))
            };
            let report = AutoplayMode::new(autoplay_config)?.run()?;
            let json =
                serde_json::to_string_pretty(&report).context("Failed to encode report")?;
            println!("{json}");
        }
    }

    Ok(())
}
