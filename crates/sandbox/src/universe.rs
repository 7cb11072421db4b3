//! World orchestration: validated setup, the tick loop, and painting.

use std::error::Error;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::prelude::*;

use crate::api::SandApi;
use crate::cell::{Cell, Species};
use crate::elements;
use crate::Grid;

/// Initial fill percentages for the stochastic world setup. Must sum to 100.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FillMix {
    pub empty: u8,
    pub water: u8,
    pub sand: u8,
}

impl Default for FillMix {
    fn default() -> Self {
        Self {
            empty: 90,
            water: 5,
            sand: 5,
        }
    }
}

/// Configuration for [`Universe::new`].
#[derive(Clone, Debug)]
pub struct UniverseConfig {
    pub width: usize,
    pub height: usize,
    /// RNG seed; `None` draws one from the OS for a fresh world each run.
    pub seed: Option<u64>,
    pub fill: FillMix,
}

impl UniverseConfig {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
            fill: FillMix::default(),
        }
    }
}

/// The startup world: 256x256 with the default mix.
impl Default for UniverseConfig {
    fn default() -> Self {
        Self::new(256, 256)
    }
}

/// Rejected [`UniverseConfig`] values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid { width: usize, height: usize },
    /// Fill percentages do not sum to 100.
    BadFillMix { total: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be nonzero, got {width}x{height}")
            }
            Self::BadFillMix { total } => {
                write!(f, "fill percentages must sum to 100, got {total}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Owns the grid and the seeded random stream; advances the world one tick
/// at a time.
///
/// `tick` and `paint` are plain blocking calls made from one thread. Any
/// number of paints may land between two ticks; each applies immediately,
/// in call order, and is visible to the next tick.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    rng: ChaCha8Rng,
}

impl Universe {
    /// Validate `config`, then build a stochastically filled world.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyGrid`] if a dimension is zero,
    /// [`ConfigError::BadFillMix`] if the fill percentages do not sum to 100.
    pub fn new(config: UniverseConfig) -> Result<Self, ConfigError> {
        let UniverseConfig {
            width,
            height,
            seed,
            fill,
        } = config;

        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        let total = u32::from(fill.empty) + u32::from(fill.water) + u32::from(fill.sand);
        if total != 100 {
            return Err(ConfigError::BadFillMix { total });
        }

        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut grid = Grid::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let roll: u8 = rng.gen_range(0..100);
                let species = if roll < fill.empty {
                    Species::Empty
                } else if roll < fill.empty + fill.water {
                    Species::Water
                } else {
                    Species::Sand
                };
                grid.set(x, y, Cell::new(species));
            }
        }

        Ok(Self { grid, rng })
    }

    /// Shared view of the cell buffer for rendering and inspection.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scenario setup.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[wasm_bindgen]
impl Universe {
    /// Build a world with the default fill mix and an OS-drawn seed.
    #[wasm_bindgen(constructor)]
    pub fn create(width: u32, height: u32) -> Result<Universe, JsError> {
        let config = UniverseConfig::new(width as usize, height as usize);
        Ok(Universe::new(config)?)
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans the grid once, row-major top to bottom. A mobile cell is
    /// processed only while its clock matches the current generation;
    /// every cell a rule writes carries the next generation's tag, so
    /// nothing moves twice in one scan. The parity flips after the scan.
    pub fn tick(&mut self) {
        let generation = self.grid.current_generation();
        let w = self.grid.width as i32;
        let h = self.grid.height as i32;

        for y in 0..h {
            for x in 0..w {
                let cell = self.grid.get(x, y);
                if cell.species == Species::Empty || cell.species == Species::Wall {
                    continue;
                }
                if cell.clock != generation {
                    continue;
                }
                let mut api = SandApi::new(&mut self.grid, &mut self.rng, x, y);
                elements::update_cell(cell.species, &mut api);
            }
        }

        self.grid.advance_generation();
    }

    /// Overwrite a square region with `species`.
    ///
    /// The box spans `[x - r, x + r) x [y - r, y + r)` with
    /// `r = diameter / 2`; parts outside the grid are skipped. Painted
    /// cells carry the current generation and are processed on the very
    /// next tick. Painting Empty erases.
    pub fn paint(&mut self, x: i32, y: i32, diameter: i32, species: Species) {
        let radius = diameter / 2;
        let mut cell = Cell::new(species);
        cell.clock = self.grid.current_generation();
        for dx in -radius..radius {
            for dy in -radius..radius {
                self.grid.set(x + dx, y + dy, cell);
            }
        }
    }

    /// Most recently committed cell at `(x, y)`; Wall outside the grid.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height as u32
    }

    /// Pointer to the cell buffer so the renderer can map it from wasm
    /// linear memory without copying.
    #[must_use]
    pub fn cells(&self) -> *const Cell {
        self.grid.cells.as_ptr()
    }
}
