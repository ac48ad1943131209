//! Key intent mapping
//!
//! Input arrives as discrete key-down events, asynchronously to the tick:
//! each event overwrites the player's intent immediately (last-write-wins,
//! no queueing) and the next tick consumes whatever is current. Keys with no
//! [`Key`] mapping simply never reach the simulation.

use crate::consts::PLAYER_SPEED;
use crate::sim::state::{Direction, SimState};

/// The recognized key intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    PauseToggle,
}

/// Apply one key event to the simulation.
///
/// Directional keys set exactly one velocity axis and the facing direction;
/// the pause key flips the cooperative pause flag.
pub fn apply_key(state: &mut SimState, key: Key) {
    match key {
        Key::Left => steer(state, Direction::Left),
        Key::Right => steer(state, Direction::Right),
        Key::Up => steer(state, Direction::Up),
        Key::Down => steer(state, Direction::Down),
        Key::PauseToggle => state.paused = !state.paused,
    }
}

fn steer(state: &mut SimState, dir: Direction) {
    state.player.vel = dir.velocity(PLAYER_SPEED);
    state.player.facing = dir;
}
