//! Game state and core simulation types
//!
//! Everything the renderer needs each frame lives in one owned [`SimState`]
//! that the tick function mutates; there is no global state. Spawn layouts
//! are pure constructors so a life-loss reset rebuilds entities instead of
//! patching fields in place.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::maze::{self, Pellet, PowerPellet};
use crate::consts::*;
use crate::grid;

/// Facing / travel direction. Input sets exactly one axis at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Velocity vector for this direction at the given speed.
    pub fn velocity(self, speed: f32) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-speed, 0.0),
            Self::Right => Vec2::new(speed, 0.0),
            Self::Up => Vec2::new(0.0, -speed),
            Self::Down => Vec2::new(0.0, speed),
        }
    }
}

/// Terminal outcomes are states, not errors: the frontend inspects the
/// phase and decides how (or whether) to notify the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Normal play.
    Running,
    /// Lives exhausted. Terminal.
    GameOver,
    /// Both pellet collections emptied. Terminal.
    LevelComplete,
}

/// Ghost behavior mode. `Chase` exists for completeness but is never
/// entered: no current rule assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostMode {
    Scatter,
    Chase,
    Frightened,
}

/// Cosmetic ghost color. Frightened ghosts turn blue; any deactivation
/// paints all four red, so the spawn palette only survives until the first
/// power pellet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GhostColor {
    Red,
    Pink,
    Cyan,
    Orange,
    Blue,
}

/// The player-controlled muncher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub facing: Direction,
    pub lives: u8,
    pub score: u32,
    /// True while the vulnerability window is open; kept in lockstep with
    /// the deadline on [`SimState`].
    pub vulnerable: bool,
}

impl Player {
    /// A player at the spawn cell, carrying over lives and score.
    pub fn at_spawn(lives: u8, score: u32) -> Self {
        Self {
            pos: Vec2::new(grid(13.0), grid(23.0)),
            vel: Vec2::ZERO,
            size: ENTITY_SIZE,
            facing: Direction::Left,
            lives,
            score,
            vulnerable: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// One of the four adversaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ghost {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: GhostColor,
    pub mode: GhostMode,
    /// Per-ghost spawn cell, used on a full reset.
    pub spawn: Vec2,
    /// Corner this ghost would retreat to in scatter mode. Unused by the
    /// random walk; reserved for pursuit steering.
    pub scatter_target: Vec2,
}

impl Ghost {
    /// Ghost number `index` (0..4) at its spawn cell, in scatter mode with
    /// its spawn color.
    pub fn at_spawn(index: usize) -> Self {
        let (color, corner) = match index {
            0 => (GhostColor::Red, (1.0, 1.0)),
            1 => (GhostColor::Pink, (27.0, 1.0)),
            2 => (GhostColor::Cyan, (1.0, 27.0)),
            _ => (GhostColor::Orange, (27.0, 27.0)),
        };
        let spawn = Vec2::new(grid(13.0), grid(11.0 + 2.0 * index as f32));
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: ENTITY_SIZE,
            color,
            mode: GhostMode::Scatter,
            spawn,
            scatter_target: Vec2::new(grid(corner.0), grid(corner.1)),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Send a captured ghost back to the shared ghost-house cell. Mode and
    /// color are untouched; only the position resets.
    pub fn send_home(&mut self) {
        self.pos = Vec2::new(grid(13.0), grid(11.0));
    }
}

/// Complete simulation state, owned by the caller and advanced one fixed
/// tick at a time.
#[derive(Debug, Clone, Serialize)]
pub struct SimState {
    /// Run seed, for reproducibility.
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    /// Accumulated sim time; advances by the fixed tick delta, never by
    /// measured wall-clock time.
    pub clock_ms: f64,
    pub phase: Phase,
    /// Cooperative pause flag. Checked once per tick; also set by both
    /// terminal phases.
    pub paused: bool,
    /// Sim-clock deadline of the current vulnerability window. Recomputed
    /// (not accumulated) on every activation, so a retrigger extends the
    /// window.
    pub vulnerable_until_ms: f64,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub walls: Vec<Rect>,
    pub pellets: Vec<Pellet>,
    pub power_pellets: Vec<PowerPellet>,
}

impl SimState {
    /// Build the maze once and place everything at spawn.
    pub fn new(seed: u64) -> Self {
        let (walls, pellets) = maze::build_level(&maze::LEVEL_LAYOUT);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock_ms: 0.0,
            phase: Phase::Running,
            paused: false,
            vulnerable_until_ms: 0.0,
            player: Player::at_spawn(STARTING_LIVES, 0),
            ghosts: (0..GHOST_COUNT).map(Ghost::at_spawn).collect(),
            walls,
            pellets,
            power_pellets: maze::power_pellet_spawns(),
        }
    }

    /// Reposition every entity at spawn after a life loss: velocities
    /// zeroed, facing reset, vulnerability cleared. Score, lives and the
    /// remaining collectibles persist.
    pub fn reset_to_spawn(&mut self) {
        self.player = Player::at_spawn(self.player.lives, self.player.score);
        self.ghosts = (0..GHOST_COUNT).map(Ghost::at_spawn).collect();
        self.vulnerable_until_ms = 0.0;
    }

    /// Open (or re-open) the vulnerability window and frighten the ghosts.
    pub fn activate_vulnerability(&mut self) {
        self.player.vulnerable = true;
        self.vulnerable_until_ms = self.clock_ms + VULNERABLE_DURATION_MS;
        for ghost in &mut self.ghosts {
            ghost.mode = GhostMode::Frightened;
            ghost.color = GhostColor::Blue;
        }
    }

    /// Close the vulnerability window. All ghosts go back to scatter and
    /// turn red.
    pub fn end_vulnerability(&mut self) {
        self.player.vulnerable = false;
        for ghost in &mut self.ghosts {
            ghost.mode = GhostMode::Scatter;
            ghost.color = GhostColor::Red;
        }
    }

    /// Time left on the vulnerability window, clamped to zero.
    pub fn vulnerable_remaining_ms(&self) -> f64 {
        if self.player.vulnerable {
            (self.vulnerable_until_ms - self.clock_ms).max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_invariants() {
        let state = SimState::new(7);
        assert_eq!(state.phase, Phase::Running);
        assert!(!state.paused);
        assert_eq!(state.player.lives, STARTING_LIVES);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.facing, Direction::Left);
        assert_eq!(state.ghosts.len(), GHOST_COUNT);
        assert!(!state.player.vulnerable);
        assert_eq!(state.vulnerable_remaining_ms(), 0.0);
        assert_eq!(state.power_pellets.len(), 4);
    }

    #[test]
    fn test_ghost_spawns_are_stacked_in_the_house_column() {
        let state = SimState::new(0);
        for (i, ghost) in state.ghosts.iter().enumerate() {
            assert_eq!(ghost.pos.x, grid(13.0));
            assert_eq!(ghost.pos.y, grid(11.0 + 2.0 * i as f32));
            assert_eq!(ghost.mode, GhostMode::Scatter);
        }
        assert_eq!(state.ghosts[0].color, GhostColor::Red);
        assert_eq!(state.ghosts[3].color, GhostColor::Orange);
    }

    #[test]
    fn test_reset_preserves_score_and_lives() {
        let mut state = SimState::new(0);
        state.player.score = 730;
        state.player.lives = 2;
        state.player.pos = Vec2::new(40.0, 40.0);
        state.activate_vulnerability();
        state.reset_to_spawn();

        assert_eq!(state.player.score, 730);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.player.pos, Vec2::new(grid(13.0), grid(23.0)));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.player.facing, Direction::Left);
        assert!(!state.player.vulnerable);
        assert_eq!(state.vulnerable_remaining_ms(), 0.0);
    }

    #[test]
    fn test_activation_frightens_every_ghost() {
        let mut state = SimState::new(0);
        state.activate_vulnerability();
        assert!(state.player.vulnerable);
        assert_eq!(state.vulnerable_remaining_ms(), VULNERABLE_DURATION_MS);
        for ghost in &state.ghosts {
            assert_eq!(ghost.mode, GhostMode::Frightened);
            assert_eq!(ghost.color, GhostColor::Blue);
        }
    }

    #[test]
    fn test_deactivation_paints_every_ghost_red() {
        let mut state = SimState::new(0);
        state.activate_vulnerability();
        state.end_vulnerability();
        assert!(!state.player.vulnerable);
        for ghost in &state.ghosts {
            assert_eq!(ghost.mode, GhostMode::Scatter);
            assert_eq!(ghost.color, GhostColor::Red);
        }
    }

    #[test]
    fn test_send_home_moves_only_position() {
        let mut state = SimState::new(0);
        state.activate_vulnerability();
        let ghost = &mut state.ghosts[2];
        ghost.pos = Vec2::new(300.0, 300.0);
        ghost.send_home();
        assert_eq!(ghost.pos, Vec2::new(grid(13.0), grid(11.0)));
        assert_eq!(ghost.mode, GhostMode::Frightened);
        assert_eq!(ghost.color, GhostColor::Blue);
    }
}
