//! Effects of activated power-ups.
//!
//! Activation only touches the state; anything that has to end later is
//! returned as an [`Expiry`] for the caller to schedule.

use tracing::debug;

use super::config::GameConfig;
use super::grid::manhattan;
use super::scheduler::DeferredEvent;
use super::state::{GameState, PowerUpKind};

/// A deferred reversal requested by an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub after_ms: u64,
    pub event: DeferredEvent,
}

/// Result of activating the held power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub kind: PowerUpKind,
    pub expiry: Option<Expiry>,
    /// Enemies removed by an explosion
    pub enemies_destroyed: usize,
}

/// Fire the held power-up and clear the slot. No-op when nothing is held.
pub fn activate(state: &mut GameState, config: &GameConfig) -> Option<Activation> {
    let kind = state.active_power_up.take()?;

    let activation = match kind {
        PowerUpKind::Dash => {
            state.is_dashing = true;
            state.tick_interval_ms = config.dash_tick_interval_ms;
            Activation {
                kind,
                expiry: Some(Expiry {
                    after_ms: config.dash_duration_ms,
                    event: DeferredEvent::EndDash,
                }),
                enemies_destroyed: 0,
            }
        }
        PowerUpKind::Explosive => {
            let head = state.snake.head();
            let before = state.enemies.len();
            state
                .enemies
                .retain(|enemy| manhattan(enemy.position, head) > config.explosive_radius);
            state.score += config.explosive_points * state.multiplier;
            Activation {
                kind,
                expiry: None,
                enemies_destroyed: before - state.enemies.len(),
            }
        }
        PowerUpKind::Venom => {
            state.multiplier += 1;
            Activation {
                kind,
                expiry: Some(Expiry {
                    after_ms: config.venom_duration_ms,
                    event: DeferredEvent::ResetMultiplier,
                }),
                enemies_destroyed: 0,
            }
        }
    };

    debug!(?kind, multiplier = state.multiplier, "power-up activated");
    Some(activation)
}

pub fn end_dash(state: &mut GameState, config: &GameConfig) {
    state.is_dashing = false;
    state.tick_interval_ms = config.tick_interval_ms;
}

/// Venom wears off as a hard reset, however many were stacked
pub fn reset_multiplier(state: &mut GameState) {
    state.multiplier = 1;
}
