//! Tile obstacle grid
//!
//! A fixed-size [row][col] map of optional obstacles. Brick cells can be shot
//! away; steel cells never can. Arena boundaries are handled by bounds checks
//! in movement/projectile code, not by grid cells.

use serde::{Deserialize, Serialize};

use crate::consts::{COLS, ROWS, TILE_SIZE};

/// Obstacle kinds: bricks are destructible, steel is not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Brick,
    Steel,
}

/// Fixed arena layout: `@` = steel, `#` = brick, anything else = empty.
/// Rows shorter than the grid width parse as empty cells.
pub const LAYOUT: [&str; ROWS] = [
    "@@@@@@@@@@@@@@@@@@@@",
    "@..................@",
    "@..##..##..##..##..@",
    "@..##..##..##..##..@",
    "@..................@",
    "@..####......####..@",
    "@..#............#..@",
    "@......####......#.@",
    "@..#............#..@",
    "@..####......####..@",
    "@..................@",
    "@..##..##..##..##..@",
    "@..##..##..##..##..@",
    "@..................@",
    "@@@@@@@@@@@@@@@@@@@@",
];

/// The tile obstacle map for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Option<ObstacleKind>>,
}

impl Grid {
    /// Build a grid from an ASCII layout. Missing rows and columns beyond a
    /// row's length are treated as empty; parsing never fails.
    pub fn from_layout(layout: &[&str]) -> Self {
        let mut cells = vec![None; ROWS * COLS];
        for (row, line) in layout.iter().enumerate().take(ROWS) {
            for (col, ch) in line.chars().enumerate().take(COLS) {
                cells[row * COLS + col] = match ch {
                    '#' => Some(ObstacleKind::Brick),
                    '@' => Some(ObstacleKind::Steel),
                    _ => None,
                };
            }
        }
        Self { cells }
    }

    /// The default fixed arena
    pub fn arena() -> Self {
        Self::from_layout(&LAYOUT)
    }

    /// Obstacle at a cell, if any. Out-of-range indices return `None`.
    pub fn obstacle_at(&self, row: usize, col: usize) -> Option<ObstacleKind> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        self.cells[row * COLS + col]
    }

    /// Whether a cell blocks movement
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.obstacle_at(row, col).is_some()
    }

    /// Remove a brick. Returns false (and leaves the grid untouched) for
    /// empty, steel, or out-of-range cells.
    pub fn destroy(&mut self, row: usize, col: usize) -> bool {
        if row >= ROWS || col >= COLS {
            return false;
        }
        match self.cells[row * COLS + col] {
            Some(ObstacleKind::Brick) => {
                self.cells[row * COLS + col] = None;
                true
            }
            _ => false,
        }
    }

    /// Center of a cell in world coordinates (for impact events)
    pub fn cell_center(row: usize, col: usize) -> glam::Vec2 {
        glam::Vec2::new(
            col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }
}
