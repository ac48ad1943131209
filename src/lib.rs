//! Maze Muncher - a tile-maze chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, movement, collisions, scoring)
//! - `input`: Key intents applied to the simulation between ticks
//!
//! Rendering is deliberately external: a frontend reads the public fields of
//! [`sim::SimState`] after each tick and draws whatever it finds there. The
//! bundled binary is a headless frontend that emits the state as JSON.

pub mod input;
pub mod sim;

pub use input::{Key, apply_key};
pub use sim::{Phase, SimState, tick};

/// Game configuration constants
pub mod consts {
    /// Side of one maze cell, in pixels. Entity positions are continuous
    /// pixel coordinates, not cell indices.
    pub const GRID_SIZE: f32 = 16.0;

    /// Board dimensions (28x31 cells). Horizontal wrap happens at these
    /// edges; the maze itself only occupies the top-left of the board.
    pub const BOARD_WIDTH: f32 = 28.0 * GRID_SIZE;
    pub const BOARD_HEIGHT: f32 = 31.0 * GRID_SIZE;

    /// Fixed nominal tick delta (~60 Hz). The sim clock accumulates this
    /// value, so timers are only approximately real-time.
    pub const TICK_DELTA_MS: f64 = 1000.0 / 60.0;

    /// Ghost speed, pixels per tick (unaffected by mode).
    pub const BASE_VELOCITY: f32 = 1.6;
    /// Player speed, pixels per tick.
    pub const PLAYER_SPEED: f32 = BASE_VELOCITY * 2.0;
    /// Bounding-box side of the player and each ghost.
    pub const ENTITY_SIZE: f32 = GRID_SIZE;

    pub const STARTING_LIVES: u8 = 3;
    pub const GHOST_COUNT: usize = 4;

    /// Score values
    pub const PELLET_VALUE: u32 = 10;
    pub const POWER_PELLET_VALUE: u32 = 50;
    pub const GHOST_CAPTURE_BONUS: u32 = 200;

    /// How long the player stays empowered after a power pellet.
    pub const VULNERABLE_DURATION_MS: f64 = 10_000.0;
}

/// Convert grid units to pixels.
#[inline]
pub fn grid(units: f32) -> f32 {
    units * consts::GRID_SIZE
}
