//! Maze Muncher headless frontend
//!
//! Stands in for a real renderer: drives the fixed-step loop with a
//! scripted patrol, logs the run's lifecycle, and prints the final state as
//! JSON so an external drawing layer (or a human) can inspect the snapshot.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use maze_muncher::input::{Key, apply_key};
use maze_muncher::sim::{Phase, SimState, tick};

/// One minute of play at 60 Hz.
const DEMO_TICKS: u32 = 3600;

fn main() -> serde_json::Result<()> {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);
    log::info!("starting run with seed {seed}");

    let mut state = SimState::new(seed);

    // Scripted patrol: cycle through the four directions every 1.5 seconds.
    let patrol = [Key::Left, Key::Up, Key::Right, Key::Down];
    for frame in 0..DEMO_TICKS {
        if frame % 90 == 0 {
            apply_key(&mut state, patrol[(frame / 90) as usize % patrol.len()]);
        }
        tick(&mut state);
        if state.phase != Phase::Running {
            break;
        }
    }

    log::info!(
        "run finished: phase {:?}, score {}, lives {}, {} pellets left",
        state.phase,
        state.player.score,
        state.player.lives,
        state.pellets.len() + state.power_pellets.len()
    );

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
