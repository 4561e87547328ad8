//! Board geometry.
//!
//! Cells are addressed in logical pixels of a 640x480 surface and always sit
//! on a multiple of [`GRID_SIZE`]. The board is a torus: stepping off one edge
//! re-enters on the opposite edge.

use rand::Rng;

use super::action::Direction;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Side length of one cell in pixels
pub const GRID_SIZE: i32 = 20;

/// Board width in cells
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / GRID_SIZE;

/// Board height in cells
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / GRID_SIZE;

/// A grid-aligned cell on the board, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell at the given column and row
    pub fn at(column: i32, row: i32) -> Self {
        Self::new(column * GRID_SIZE, row * GRID_SIZE)
    }

    /// Starting cell for a fresh snake
    pub fn center() -> Self {
        Self::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2)
    }

    pub fn column(&self) -> i32 {
        self.x / GRID_SIZE
    }

    pub fn row(&self) -> i32 {
        self.y / GRID_SIZE
    }

    /// The neighbouring cell in `direction`, wrapped around the board edges
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx * GRID_SIZE).rem_euclid(SCREEN_WIDTH),
            y: (self.y + dy * GRID_SIZE).rem_euclid(SCREEN_HEIGHT),
        }
    }

    /// A uniformly random cell anywhere on the board
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::at(rng.gen_range(0..GRID_WIDTH), rng.gen_range(0..GRID_HEIGHT))
    }
}
