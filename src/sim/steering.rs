//! Ghost movement strategies
//!
//! Mode is consumed through a strategy seam so pursue/flee behavior can be
//! added without touching the tick loop. Only the random walk exists today;
//! every mode shares it, which matches the shipped behavior exactly.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Direction, Ghost, GhostMode, Player};
use crate::consts::BASE_VELOCITY;

/// Picks a ghost's velocity for the current tick.
pub trait Steering {
    fn choose_velocity(&self, ghost: &Ghost, player: &Player, rng: &mut Pcg32) -> Vec2;
}

/// Uniform random cardinal wander. Speed is the base velocity regardless of
/// mode, and walls are ignored entirely (ghosts may pass through them).
pub struct RandomWalk;

impl Steering for RandomWalk {
    fn choose_velocity(&self, _ghost: &Ghost, _player: &Player, rng: &mut Pcg32) -> Vec2 {
        let dir = match rng.random_range(0..4) {
            0 => Direction::Left,
            1 => Direction::Right,
            2 => Direction::Up,
            _ => Direction::Down,
        };
        dir.velocity(BASE_VELOCITY)
    }
}

/// Strategy for a mode.
///
/// TODO: pursue steering for `Chase` (toward the player) and flee steering
/// for `Frightened` (away from it); until then every mode wanders.
pub fn steering_for(mode: GhostMode) -> &'static dyn Steering {
    match mode {
        GhostMode::Scatter | GhostMode::Chase | GhostMode::Frightened => &RandomWalk,
    }
}
