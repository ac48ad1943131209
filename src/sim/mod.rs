//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only (no measured wall-clock time)
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Terminal outcomes (game over, level complete) are exposed as [`Phase`]
//! values, never as blocking calls; the frontend decides how to present them.

pub mod collision;
pub mod maze;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::Rect;
pub use maze::{LEVEL_LAYOUT, Pellet, PowerPellet, build_level, power_pellet_spawns};
pub use state::{Direction, Ghost, GhostColor, GhostMode, Phase, Player, SimState};
pub use steering::{RandomWalk, Steering, steering_for};
pub use tick::tick;
