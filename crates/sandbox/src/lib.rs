//! Falling sand cellular automaton engine.
//!
//! A [`Universe`] owns the cell grid and a seeded random stream. The driver
//! loop paints cells between ticks, calls [`Universe::tick`] once per frame,
//! then reads the buffer back to refresh its pixel representation.

pub mod api;
pub mod cell;
pub mod elements;
pub mod universe;

use cell::{Cell, Species};
use wasm_bindgen::prelude::*;

pub use universe::{ConfigError, FillMix, Universe, UniverseConfig};

/// 2D grid of cells. Out-of-bounds reads return Wall, writes are no-ops.
///
/// The generation parity bit flips exactly once per completed tick; cells
/// are only processed while their clock matches the current parity.
#[derive(Debug)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    generation: u8,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
            generation: 0,
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize]
        } else {
            Cell::wall()
        }
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y as usize * self.width + x as usize] = cell;
        }
    }

    /// Parity a cell's clock must match to be processed this tick.
    #[must_use]
    pub fn current_generation(&self) -> u8 {
        self.generation
    }

    /// Parity stamped on every cell written during this tick.
    #[must_use]
    pub fn next_generation(&self) -> u8 {
        1 - self.generation
    }

    pub(crate) fn advance_generation(&mut self) {
        self.generation = self.next_generation();
    }
}

/// Color table entry for the renderer, as `[r, g, b, a]`.
#[wasm_bindgen]
#[must_use]
pub fn species_rgba(species: Species) -> Vec<u8> {
    species.rgba().to_vec()
}
