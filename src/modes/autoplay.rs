//! Headless autoplay
//!
//! Plays a batch of games with a random player that steers now and then and
//! fires every power-up as soon as it holds one. Useful for smoke-testing the
//! rules and for watching score distributions without a terminal.
//!
//! # Example
//!
//! ```rust,no_run
//! use power_snake::modes::{AutoplayConfig, AutoplayMode};
//!
//! let mut autoplay = AutoplayMode::new(AutoplayConfig::new(50, 7))?;
//! let report = autoplay.run()?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::game::{Direction, GameConfig, GameEngine, GameSnapshot};
use crate::metrics::SessionStats;

/// Configuration for autoplay mode
#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Number of games to play
    pub games: usize,

    /// A game still running after this many ticks is cut short
    pub max_ticks: u64,

    /// Game time fed to the engine per driver step, in milliseconds
    pub step_ms: u64,

    /// Chance per driver step that the player picks a new direction
    pub turn_chance: f64,

    /// Log progress every N games
    pub log_frequency: usize,

    pub seed: u64,

    pub game_config: GameConfig,
}

impl AutoplayConfig {
    pub fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            max_ticks: 2000,
            step_ms: 50,
            turn_chance: 0.2,
            log_frequency: 10,
            seed,
            game_config: GameConfig::default(),
        }
    }
}

/// Summary printed at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct AutoplayReport {
    pub games: usize,
    pub mean_score: f64,
    pub best_score: u32,
    pub mean_ticks: f64,
    pub mean_length: f64,
    /// Final frame of the last game
    pub last_game: Option<GameSnapshot>,
}

pub struct AutoplayMode {
    engine: GameEngine,
    player: StdRng,
    stats: SessionStats,
    config: AutoplayConfig,
    last_game: Option<GameSnapshot>,
}

impl AutoplayMode {
    pub fn new(config: AutoplayConfig) -> Result<Self> {
        let engine = GameEngine::with_seed(config.game_config.clone(), config.seed)?;
        let player = StdRng::seed_from_u64(config.seed.wrapping_add(1));
        let stats = SessionStats::new(100);

        Ok(Self {
            engine,
            player,
            stats,
            config,
            last_game: None,
        })
    }

    /// Play every configured game and summarise them
    pub fn run(&mut self) -> Result<AutoplayReport> {
        ensure!(self.config.step_ms > 0, "step_ms must be positive");
        info!(
            games = self.config.games,
            seed = self.config.seed,
            max_ticks = self.config.max_ticks,
            "autoplay started"
        );

        for game in 0..self.config.games {
            let (score, ticks, length) = self.run_game();
            self.stats.record_game(score, ticks, length);

            if self.config.log_frequency > 0 && (game + 1) % self.config.log_frequency == 0 {
                info!(
                    "[Game {}/{}] {}",
                    game + 1,
                    self.config.games,
                    self.stats.format_summary()
                );
            }
        }

        info!("autoplay complete: {}", self.stats.format_summary());

        Ok(AutoplayReport {
            games: self.stats.total_games(),
            mean_score: self.stats.mean_score(),
            best_score: self.stats.best_score(),
            mean_ticks: self.stats.mean_ticks(),
            mean_length: self.stats.mean_length(),
            last_game: self.last_game.clone(),
        })
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Play one game to the end (or the tick cap).
    /// Returns the final score, ticks survived and snake length.
    fn run_game(&mut self) -> (u32, u64, usize) {
        let mut state = self.engine.reset();
        let mut pending = None;

        while !state.game_over && state.ticks < self.config.max_ticks {
            if state.active_power_up.is_some() {
                self.engine.activate_power_up(&mut state);
            }

            if self.player.gen_bool(self.config.turn_chance) {
                pending = Some(Direction::ALL[self.player.gen_range(0..Direction::ALL.len())]);
            }

            self.engine
                .advance(&mut state, self.config.step_ms, &mut pending);
        }

        self.last_game = Some(self.engine.snapshot(&state));
        (state.score, state.ticks, state.snake.len())
    }
}
