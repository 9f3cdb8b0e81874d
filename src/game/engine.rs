use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use super::{
    action::{Action, Direction},
    collision::{self, DamageCause},
    config::GameConfig,
    power_up,
    scheduler::{DeferredEvent, Scheduler},
    snapshot::GameSnapshot,
    spawner::Spawner,
    state::{GameState, Position, PowerUpKind, Snake},
};

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepResult {
    /// Lives lost this tick, one entry per cause
    pub damage: Vec<DamageCause>,
    pub ate_food: bool,
    /// Power-up picked up this tick
    pub collected: Option<PowerUpKind>,
    /// Whether the game has terminated
    pub terminated: bool,
}

/// Owns the clock, the deferred events and the randomness of a session.
/// The state itself is passed in, so the frontend can hold and read it.
pub struct GameEngine {
    config: GameConfig,
    spawner: Spawner,
    scheduler: Scheduler,
    generation: u64,
    now_ms: u64,
    next_tick_at: u64,
    shake_until: u64,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    /// Fails if the configuration does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_spawner(config, Spawner::new())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_spawner(config, Spawner::with_seed(seed))
    }

    fn with_spawner(config: GameConfig, spawner: Spawner) -> Result<Self> {
        // A zero tick interval would keep `advance` from ever returning
        config.validate()?;

        Ok(Self {
            config,
            spawner,
            scheduler: Scheduler::new(),
            generation: 0,
            now_ms: 0,
            next_tick_at: 0,
            shake_until: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Game time in milliseconds since the engine was created
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn next_tick_at(&self) -> u64 {
        self.next_tick_at
    }

    pub fn scheduled_events(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_shaking(&self) -> bool {
        self.now_ms < self.shake_until
    }

    /// Start a new session. Everything scheduled by earlier sessions is dropped.
    pub fn reset(&mut self) -> GameState {
        self.generation += 1;
        self.scheduler.clear();
        self.shake_until = self.now_ms;
        self.next_tick_at = self.now_ms + self.config.tick_interval_ms;

        let snake = Snake::new(
            self.config.start_position,
            self.config.start_direction,
            1,
        );
        let mut state = GameState::new(
            snake,
            self.config.initial_lives,
            self.config.tick_interval_ms,
        );
        state.generation = self.generation;
        state.enemies = self
            .spawner
            .spawn_enemies(self.config.initial_enemies, self.config.enemy_speed);
        state.food = (0..self.config.initial_food)
            .map(|_| self.spawner.spawn_food())
            .collect();
        state.power_ups = (0..self.config.initial_power_ups)
            .map(|_| self.spawner.spawn_power_up())
            .collect();

        info!(generation = self.generation, "new session");
        state
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if state.game_over {
            return StepResult {
                terminated: true,
                ..Default::default()
            };
        }

        // Reversing straight into the neck is ignored
        if let Action::Move(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let old_head = state.snake.head();
        let new_head = old_head.stepped(state.snake.direction);
        let hits = collision::resolve(state, new_head);

        let damage = hits.damage();
        for cause in &damage {
            self.apply_damage(state, *cause);
        }

        if let Some(index) = hits.food {
            let food = state.food.remove(index);
            state.score += self.config.food_points * state.multiplier;
            self.schedule(self.config.food_respawn_delay_ms, DeferredEvent::SpawnFood);
            debug!(x = food.position.x, y = food.position.y, score = state.score, "ate food");
        }

        let mut collected = None;
        if let Some(index) = hits.power_up {
            let picked = state.power_ups.remove(index);
            state.score += self.config.power_up_points * state.multiplier;
            // Last collected wins; an unused one is lost
            state.active_power_up = Some(picked.kind);
            collected = Some(picked.kind);
            self.schedule(
                self.config.power_up_respawn_delay_ms,
                DeferredEvent::SpawnPowerUp,
            );
            debug!(kind = ?picked.kind, score = state.score, "collected power-up");
        }

        state.snake.advance_to(new_head, hits.grows());
        self.move_enemies(state, old_head);
        state.ticks += 1;

        if state.game_over {
            info!(score = state.score, length = state.snake.len(), ticks = state.ticks, "game over");
        }

        StepResult {
            damage,
            ate_food: hits.grows(),
            collected,
            terminated: state.game_over,
        }
    }

    /// Fire the held power-up, if any. Returns the kind that fired.
    pub fn activate_power_up(&mut self, state: &mut GameState) -> Option<PowerUpKind> {
        if state.game_over {
            return None;
        }

        let activation = power_up::activate(state, &self.config)?;
        if let Some(expiry) = activation.expiry {
            self.schedule(expiry.after_ms, expiry.event);
        }
        if activation.kind == PowerUpKind::Dash {
            self.next_tick_at = self.now_ms + state.tick_interval_ms;
        }
        if activation.enemies_destroyed > 0 {
            debug!(destroyed = activation.enemies_destroyed, "explosion");
        }

        Some(activation.kind)
    }

    /// Move game time forward by `elapsed_ms`, firing deferred events and
    /// running every tick that falls due, in time order. An event due at the
    /// same instant as a tick fires first. The pending direction is consumed
    /// by the first tick.
    pub fn advance(
        &mut self,
        state: &mut GameState,
        elapsed_ms: u64,
        pending: &mut Option<Direction>,
    ) -> Vec<StepResult> {
        let target = self.now_ms + elapsed_ms;
        let mut results = Vec::new();

        loop {
            let event_due = self.scheduler.next_due().filter(|due| *due <= target);
            let tick_due =
                Some(self.next_tick_at).filter(|due| *due <= target && !state.game_over);

            match (event_due, tick_due) {
                (Some(event_at), Some(tick_at)) if event_at <= tick_at => {
                    self.fire_next(state, event_at)
                }
                (Some(event_at), None) => self.fire_next(state, event_at),
                (_, Some(tick_at)) => {
                    self.now_ms = self.now_ms.max(tick_at);
                    results.push(self.step(state, Action::from(pending.take())));
                    self.next_tick_at = self.now_ms + state.tick_interval_ms;
                }
                (None, None) => break,
            }
        }

        self.now_ms = target;
        results
    }

    pub fn snapshot(&self, state: &GameState) -> GameSnapshot {
        GameSnapshot::capture(state, self.is_shaking())
    }

    fn schedule(&mut self, after_ms: u64, event: DeferredEvent) {
        self.scheduler
            .schedule(self.now_ms + after_ms, self.generation, event);
    }

    fn fire_next(&mut self, state: &mut GameState, at: u64) {
        self.now_ms = self.now_ms.max(at);
        let Some(entry) = self.scheduler.pop_due(self.now_ms) else {
            return;
        };

        let stale = entry.generation != self.generation || state.generation != self.generation;
        if stale || state.game_over {
            debug!(event = ?entry.event, stale, "dropped deferred event");
            return;
        }

        match entry.event {
            DeferredEvent::SpawnFood => state.food.push(self.spawner.spawn_food()),
            DeferredEvent::SpawnPowerUp => state.power_ups.push(self.spawner.spawn_power_up()),
            DeferredEvent::EndDash => {
                power_up::end_dash(state, &self.config);
                self.next_tick_at = self.now_ms + state.tick_interval_ms;
            }
            DeferredEvent::ResetMultiplier => power_up::reset_multiplier(state),
        }
    }

    fn apply_damage(&mut self, state: &mut GameState, cause: DamageCause) {
        let ended = collision::take_damage(state);
        self.shake_until = self.now_ms + self.config.shake_duration_ms;
        debug!(?cause, lives = state.lives, ended, "took damage");
    }

    /// Each enemy may step one cell towards `target` along its dominant axis
    fn move_enemies(&mut self, state: &mut GameState, target: Position) {
        for enemy in &mut state.enemies {
            if !self.spawner.roll(enemy.speed) {
                continue;
            }
            let dx = target.x - enemy.position.x;
            let dy = target.y - enemy.position.y;
            let step = if dx.abs() > dy.abs() {
                (dx.signum(), 0)
            } else if dy > 0 {
                (0, 1)
            } else {
                (0, -1)
            };
            enemy.position = enemy.position.moved_by(step.0, step.1).wrapped();
        }
    }
}
