//! Relative-offset API for element update functions.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::cell::Cell;
use crate::Grid;

/// Accessor bound to one cell's coordinates for the length of a rule call.
///
/// Out-of-bounds reads return Wall, writes are no-ops. Every `set` stamps
/// the grid's next generation on the written cell, so anything a rule moves
/// sits out the rest of the current scan.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut ChaCha8Rng,
    pub x: i32,
    pub y: i32,
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a mut Grid, rng: &'a mut ChaCha8Rng, x: i32, y: i32) -> Self {
        Self { grid, rng, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.grid.get(self.x + dx, self.y + dy)
    }

    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let mut stamped = cell;
        stamped.clock = self.grid.next_generation();
        self.grid.set(self.x + dx, self.y + dy, stamped);
    }

    /// Uniformly random -1 or +1, freshly sampled on every call.
    pub fn random_direction(&mut self) -> i32 {
        self.rng.gen_range(0..2) * 2 - 1
    }
}
