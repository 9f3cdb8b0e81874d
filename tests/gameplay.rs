//! Timed scenarios driven through the engine clock

use power_snake::game::{
    Direction, Enemy, EntityId, GameConfig, GameEngine, GameState, Position, PowerUpKind, Snake,
};

/// Engine whose sessions start with nothing but the snake
fn empty_field_engine() -> (GameEngine, GameState) {
    let config = GameConfig {
        initial_enemies: 0,
        initial_food: 0,
        initial_power_ups: 0,
        ..Default::default()
    };
    let mut engine = GameEngine::with_seed(config, 2024).unwrap();
    let state = engine.reset();
    (engine, state)
}

#[test]
fn ticks_follow_the_tick_interval() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    assert!(engine.advance(&mut state, 149, &mut pending).is_empty());
    assert_eq!(engine.advance(&mut state, 1, &mut pending).len(), 1);
    assert_eq!(engine.advance(&mut state, 450, &mut pending).len(), 3);
    assert_eq!(state.ticks, 4);
    assert_eq!(state.snake.head(), Position::new(14, 10));
}

#[test]
fn pending_direction_is_consumed_by_the_next_tick() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = Some(Direction::Down);

    engine.advance(&mut state, 100, &mut pending);
    assert_eq!(pending, Some(Direction::Down));

    engine.advance(&mut state, 50, &mut pending);
    assert_eq!(pending, None);
    assert_eq!(state.snake.head(), Position::new(10, 11));
}

#[test]
fn venom_multiplier_returns_to_one() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    state.active_power_up = Some(PowerUpKind::Venom);
    assert_eq!(engine.activate_power_up(&mut state), Some(PowerUpKind::Venom));
    assert_eq!(state.multiplier, 2);
    assert_eq!(state.active_power_up, None);

    engine.advance(&mut state, 4999, &mut pending);
    assert_eq!(state.multiplier, 2);

    engine.advance(&mut state, 1, &mut pending);
    assert_eq!(state.multiplier, 1);
}

#[test]
fn stacked_venom_resets_at_first_expiry() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    state.active_power_up = Some(PowerUpKind::Venom);
    engine.activate_power_up(&mut state);
    engine.advance(&mut state, 2000, &mut pending);

    state.active_power_up = Some(PowerUpKind::Venom);
    engine.activate_power_up(&mut state);
    assert_eq!(state.multiplier, 3);

    engine.advance(&mut state, 3000, &mut pending);
    assert_eq!(state.multiplier, 1);

    engine.advance(&mut state, 2000, &mut pending);
    assert_eq!(state.multiplier, 1);
}

#[test]
fn dash_speeds_up_ticks_for_one_second() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    state.active_power_up = Some(PowerUpKind::Dash);
    engine.activate_power_up(&mut state);
    assert!(state.is_dashing);

    // 50 ms ticks at 50, 100, ..., 950; the dash ends at 1000 before the tick due then
    let ticks = engine.advance(&mut state, 1000, &mut pending);
    assert_eq!(ticks.len(), 19);
    assert!(!state.is_dashing);
    assert_eq!(state.tick_interval_ms, 150);

    assert!(engine.advance(&mut state, 149, &mut pending).is_empty());
    assert_eq!(engine.advance(&mut state, 1, &mut pending).len(), 1);
}

#[test]
fn second_dash_ends_with_the_first() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    state.active_power_up = Some(PowerUpKind::Dash);
    engine.activate_power_up(&mut state);
    engine.advance(&mut state, 500, &mut pending);

    state.active_power_up = Some(PowerUpKind::Dash);
    engine.activate_power_up(&mut state);
    assert!(state.is_dashing);

    engine.advance(&mut state, 500, &mut pending);
    assert!(!state.is_dashing);
    assert_eq!(state.tick_interval_ms, 150);

    // The second expiry at 1500 finds the dash already over
    let ticks = engine.advance(&mut state, 500, &mut pending);
    assert_eq!(ticks.len(), 3);
    assert!(!state.is_dashing);
    assert_eq!(state.tick_interval_ms, 150);
}

#[test]
fn dashing_through_an_enemy_is_harmless() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;
    state.enemies.push(Enemy {
        id: EntityId(1),
        position: Position::new(11, 10),
        speed: 0.0,
    });

    state.active_power_up = Some(PowerUpKind::Dash);
    engine.activate_power_up(&mut state);
    engine.advance(&mut state, 50, &mut pending);

    assert_eq!(state.snake.head(), Position::new(11, 10));
    assert_eq!(state.lives, 3);
}

#[test]
fn eaten_food_respawns_after_delay() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;
    state.food.push(power_snake::game::Food {
        id: EntityId(1),
        position: Position::new(11, 10),
    });

    let ticks = engine.advance(&mut state, 150, &mut pending);
    assert!(ticks[0].ate_food);
    assert!(state.food.is_empty());

    engine.advance(&mut state, 1999, &mut pending);
    assert!(state.food.is_empty());
    engine.advance(&mut state, 1, &mut pending);
    assert_eq!(state.food.len(), 1);
}

#[test]
fn collected_power_up_respawns_after_delay() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;
    state.power_ups.push(power_snake::game::PowerUp {
        id: EntityId(1),
        kind: PowerUpKind::Explosive,
        position: Position::new(11, 10),
    });

    engine.advance(&mut state, 150, &mut pending);
    assert_eq!(state.active_power_up, Some(PowerUpKind::Explosive));

    engine.advance(&mut state, 2999, &mut pending);
    assert!(state.power_ups.is_empty());
    engine.advance(&mut state, 1, &mut pending);
    assert_eq!(state.power_ups.len(), 1);
}

#[test]
fn reset_invalidates_scheduled_effects() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;

    state.active_power_up = Some(PowerUpKind::Venom);
    engine.activate_power_up(&mut state);
    engine.advance(&mut state, 1000, &mut pending);

    let mut fresh = engine.reset();
    assert_eq!(engine.scheduled_events(), 0);

    fresh.active_power_up = Some(PowerUpKind::Venom);
    engine.activate_power_up(&mut fresh);
    engine.advance(&mut fresh, 4500, &mut pending);
    assert_eq!(fresh.multiplier, 2);
}

#[test]
fn stale_state_ignores_events_of_new_session() {
    let (mut engine, mut old) = empty_field_engine();
    let mut pending = None;
    let _new = engine.reset();

    old.active_power_up = Some(PowerUpKind::Venom);
    old.multiplier = 4;
    engine.activate_power_up(&mut old);
    engine.advance(&mut old, 6000, &mut pending);
    assert_eq!(old.multiplier, 5);
}

#[test]
fn game_over_freezes_the_session() {
    let (mut engine, mut state) = empty_field_engine();
    let mut pending = None;
    state.lives = 1;
    state.snake = Snake::new(Position::new(10, 10), Direction::Right, 1);
    state.enemies.push(Enemy {
        id: EntityId(1),
        position: Position::new(11, 10),
        speed: 0.0,
    });
    state.active_power_up = Some(PowerUpKind::Venom);
    engine.activate_power_up(&mut state);

    let ticks = engine.advance(&mut state, 150, &mut pending);
    assert!(ticks[0].terminated);
    assert!(state.game_over);
    assert!(engine.snapshot(&state).shaking);

    let frozen = state.clone();
    assert!(engine.advance(&mut state, 10_000, &mut pending).is_empty());
    assert_eq!(state, frozen);
    assert_eq!(state.multiplier, 2);
    assert!(!engine.snapshot(&state).shaking);
}
