//! Fixed timestep simulation tick
//!
//! One call advances the world by the nominal tick delta, in the same order
//! every time: player movement and wall resolution, ghost movement, ghost
//! collisions, pellet consumption, power-pellet consumption, level
//! completion, vulnerability decay. The pause flag and the terminal phases
//! short-circuit the whole tick, which is what "freezing" the game means.

use crate::consts::*;
use crate::sim::state::{Direction, Phase, SimState};
use crate::sim::steering::steering_for;

/// Advance the game state by one fixed tick.
pub fn tick(state: &mut SimState) {
    if state.paused || state.phase != Phase::Running {
        return;
    }

    state.clock_ms += TICK_DELTA_MS;

    move_player(state);
    move_ghosts(state);
    resolve_ghost_collisions(state);
    consume_pellets(state);
    consume_power_pellets(state);
    check_level_completion(state);
    decay_vulnerability(state);
}

/// Apply the current intent, wrap through the horizontal tunnel, then push
/// the player back out of any wall it ended up in.
fn move_player(state: &mut SimState) {
    let SimState { player, walls, .. } = state;

    player.pos += player.vel;

    // Horizontal wrap only; there is no vertical tunnel.
    if player.pos.x < 0.0 {
        player.pos.x = BOARD_WIDTH - player.size;
    } else if player.pos.x >= BOARD_WIDTH {
        player.pos.x = 0.0;
    }

    // Snap against each overlapping wall on the axis of travel. Walls are
    // resolved independently in iteration order, so with several overlaps
    // the last one wins. This is a push-back, not a velocity change: input
    // can shove the player into the same wall again next tick.
    for wall in walls.iter() {
        if player.bounds().intersects(wall) {
            match player.facing {
                Direction::Left => player.pos.x = wall.x + wall.w,
                Direction::Right => player.pos.x = wall.x - player.size,
                Direction::Up => player.pos.y = wall.y + wall.h,
                Direction::Down => player.pos.y = wall.y - player.size,
            }
        }
    }
}

/// Every ghost re-rolls a direction each tick and moves, ignoring walls.
fn move_ghosts(state: &mut SimState) {
    let SimState {
        ghosts,
        player,
        rng,
        ..
    } = state;

    for ghost in ghosts.iter_mut() {
        let vel = steering_for(ghost.mode).choose_velocity(ghost, player, rng);
        ghost.vel = vel;
        ghost.pos += vel;

        if ghost.pos.x < 0.0 {
            ghost.pos.x = BOARD_WIDTH - ghost.size;
        } else if ghost.pos.x >= BOARD_WIDTH {
            ghost.pos.x = 0.0;
        }
    }
}

/// Player vs ghost contact: a capture while vulnerable, a lost life (or the
/// end of the run) otherwise.
fn resolve_ghost_collisions(state: &mut SimState) {
    for i in 0..state.ghosts.len() {
        if !state.player.bounds().intersects(&state.ghosts[i].bounds()) {
            continue;
        }

        if state.player.vulnerable {
            state.player.score += GHOST_CAPTURE_BONUS;
            state.ghosts[i].send_home();
        } else {
            state.player.lives -= 1;
            if state.player.lives > 0 {
                log::info!(
                    "caught by a ghost, {} lives remaining",
                    state.player.lives
                );
                // Later ghosts are re-tested against the respawned
                // positions.
                state.reset_to_spawn();
            } else {
                state.phase = Phase::GameOver;
                state.paused = true;
                log::info!("game over, final score {}", state.player.score);
                break;
            }
        }
    }
}

fn consume_pellets(state: &mut SimState) {
    let player_bounds = state.player.bounds();
    let mut eaten = 0u32;
    state.pellets.retain(|pellet| {
        if player_bounds.intersects(&pellet.bounds()) {
            eaten += 1;
            false
        } else {
            true
        }
    });
    state.player.score += eaten * PELLET_VALUE;
}

fn consume_power_pellets(state: &mut SimState) {
    let player_bounds = state.player.bounds();
    let mut eaten = 0u32;
    state.power_pellets.retain(|pellet| {
        if player_bounds.intersects(&pellet.bounds()) {
            eaten += 1;
            false
        } else {
            true
        }
    });

    if eaten > 0 {
        state.player.score += eaten * POWER_PELLET_VALUE;
        state.activate_vulnerability();
        log::debug!(
            "power pellet eaten, vulnerability window open until {:.0} ms",
            state.vulnerable_until_ms
        );
    }
}

fn check_level_completion(state: &mut SimState) {
    if state.phase == Phase::Running
        && state.pellets.is_empty()
        && state.power_pellets.is_empty()
    {
        state.phase = Phase::LevelComplete;
        state.paused = true;
        log::info!("level complete, final score {}", state.player.score);
    }
}

/// Close the vulnerability window once the deadline passes. The deadline is
/// a single recomputed timestamp on the sim clock; there is no second decay
/// path racing it.
fn decay_vulnerability(state: &mut SimState) {
    if state.player.vulnerable && state.clock_ms >= state.vulnerable_until_ms {
        state.end_vulnerability();
    }
}
