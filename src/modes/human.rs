use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::info;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, Screen};

/// Interactive terminal game
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    screen: Screen,
    should_quit: bool,
    pending_direction: Option<Direction>,
    last_frame: Instant,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed)?,
            None => GameEngine::new(config)?,
        };
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            screen: Screen::Ready,
            should_quit: false,
            pending_direction: None,
            last_frame: Instant::now(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One timer drives both the simulation clock and drawing, ~30 FPS.
        // Ticks fire inside the engine at whatever interval the state asks for.
        let frame_interval = Duration::from_millis(33);
        let mut frame_timer = interval(frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Advance the game and render a frame
                _ = frame_timer.tick() => {
                    self.update_game();
                    self.metrics.update();
                    let snapshot = self.engine.snapshot(&self.state);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics, self.screen);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::GameAction(Action::Move(dir)) => {
                    // Checked against the committed direction so a quick
                    // reversal does not overwrite a valid buffered turn
                    if self.screen == Screen::Playing
                        && !self.state.snake.direction.is_opposite(dir)
                    {
                        self.pending_direction = Some(dir);
                    }
                }
                KeyAction::GameAction(Action::Continue) => {
                    // No action needed
                }
                KeyAction::UsePowerUp => {
                    if self.screen == Screen::Playing {
                        self.engine.activate_power_up(&mut self.state);
                    }
                }
                KeyAction::Start => {
                    if self.screen == Screen::Ready {
                        self.start_game();
                    }
                }
                KeyAction::Restart => {
                    self.start_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    /// Feed real elapsed time into the engine
    fn update_game(&mut self) {
        if self.screen != Screen::Playing {
            self.last_frame = Instant::now();
            return;
        }

        // Carry sub-millisecond remainders over to the next frame
        let elapsed_ms = self.last_frame.elapsed().as_millis() as u64;
        self.last_frame += Duration::from_millis(elapsed_ms);

        self.engine
            .advance(&mut self.state, elapsed_ms, &mut self.pending_direction);

        if self.state.game_over {
            self.screen = Screen::GameOver;
            self.metrics
                .on_game_over(self.state.score, self.state.snake.len());
            info!(
                games_played = self.metrics.games_played,
                high_score = self.metrics.high_score,
                "game finished"
            );
        }
    }

    fn start_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.pending_direction = None;
        self.screen = Screen::Playing;
        self.last_frame = Instant::now();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
