//! Maze construction
//!
//! The level is a compiled-in block of row strings. Walls and plain pellets
//! are derived from it once at startup; the four power pellets are seeded
//! from fixed coordinates instead (they sit in the wrap tunnels outside the
//! drawn maze, so they never appear in the layout).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::GRID_SIZE;
use crate::grid;

/// The level layout. `#` is a wall, `o` a pellet; anything else (including
/// `.` and space) is open floor. Rows are ragged on purpose.
pub const LEVEL_LAYOUT: [&str; 24] = [
    "####################",
    "#..................#",
    "#.####.#####.####.#",
    "#o####.#####.####o#",
    "#.####.#####.####.#",
    "#..................#",
    "#.####.#.##.#.####.#",
    "#.####.#.##.#.####.#",
    "#......##..##......#",
    "######.#..#.######",
    "     #.#..#. #",
    "     #.#..#. #",
    "######.###.######",
    "     #.#..#. #",
    "     #.#..#. #",
    "######.#..#.######",
    "#.................#",
    "#.####.#.#.####.#",
    "#o..##..#..##..o#",
    "###.#.#####.#.###",
    "   #.#.....#. #",
    "   #.#.###.#. #",
    "   #..... .....#",
    "   ###########",
];

/// Side of a plain pellet's collision box.
const PELLET_SIZE: f32 = 4.0;
/// Side of a power pellet's collision box.
const POWER_PELLET_SIZE: f32 = 8.0;

/// A plain collectible. Consumed once, then gone for good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pellet {
    /// Center of the tile the pellet was spawned on.
    pub pos: Vec2,
    pub size: f32,
}

impl Pellet {
    /// Collision box, anchored at `pos` (not centered on it).
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// A power collectible. Eating one makes the ghosts vulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerPellet {
    pub pos: Vec2,
}

impl PowerPellet {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, POWER_PELLET_SIZE, POWER_PELLET_SIZE)
    }
}

/// Build walls and pellets from a layout.
///
/// Pure function of the input. Rows may differ in length; unrecognized
/// characters are treated as open floor.
pub fn build_level(layout: &[&str]) -> (Vec<Rect>, Vec<Pellet>) {
    let mut walls = Vec::new();
    let mut pellets = Vec::new();

    for (row, line) in layout.iter().enumerate() {
        for (col, tile) in line.chars().enumerate() {
            let x = col as f32 * GRID_SIZE;
            let y = row as f32 * GRID_SIZE;
            match tile {
                '#' => walls.push(Rect::new(x, y, GRID_SIZE, GRID_SIZE)),
                'o' => pellets.push(Pellet {
                    pos: Vec2::new(x + GRID_SIZE / 2.0, y + GRID_SIZE / 2.0),
                    size: PELLET_SIZE,
                }),
                _ => {}
            }
        }
    }

    (walls, pellets)
}

/// The four power pellets, at fixed board positions independent of the
/// layout.
pub fn power_pellet_spawns() -> Vec<PowerPellet> {
    [(1.5, 3.5), (25.5, 3.5), (1.5, 23.5), (25.5, 23.5)]
        .iter()
        .map(|&(cx, cy)| PowerPellet {
            pos: Vec2::new(grid(cx), grid(cy)),
        })
        .collect()
}
