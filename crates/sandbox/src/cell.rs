//! Cell and Species types for the simulation grid.

use std::fmt;

use wasm_bindgen::prelude::*;

/// Discriminant values are the raw bytes the renderer reads; do not reorder.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Species {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wall = 3,
}

impl Species {
    /// RGBA the renderer paints for this species. Empty is fully
    /// transparent; everything else is opaque.
    #[must_use]
    pub fn rgba(self) -> [u8; 4] {
        match self {
            Self::Empty => [0, 0, 0, 0],
            Self::Sand => [255, 209, 0, 255],
            Self::Water => [0, 0, 255, 255],
            Self::Wall => [128, 128, 128, 255],
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Wall => write!(f, "Wall"),
        }
    }
}

/// 2-byte grid cell: `#[repr(C)]` for direct buffer mapping by the renderer.
///
/// `clock` is a one-bit generation tag. A cell is due for processing only
/// while its clock matches the grid's current generation; writes made
/// through the update api stamp the next generation, which is what keeps a
/// moved cell from being processed twice in one tick.
#[wasm_bindgen]
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub species: Species,
    pub clock: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.species)
    }
}

impl Cell {
    #[must_use]
    pub fn new(species: Species) -> Self {
        Self { species, clock: 0 }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Species::Empty)
    }

    #[must_use]
    pub fn wall() -> Self {
        Self::new(Species::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_is_2_bytes() {
        assert_eq!(std::mem::size_of::<Cell>(), 2);
    }

    #[test]
    fn species_discriminant_values() {
        assert_eq!(Species::Empty as u8, 0);
        assert_eq!(Species::Sand as u8, 1);
        assert_eq!(Species::Water as u8, 2);
        assert_eq!(Species::Wall as u8, 3);
    }

    #[test]
    fn cell_constructors() {
        let empty = Cell::empty();
        assert_eq!(empty.species, Species::Empty);
        assert_eq!(empty.clock, 0);

        let wall = Cell::wall();
        assert_eq!(wall.species, Species::Wall);

        let sand = Cell::new(Species::Sand);
        assert_eq!(sand.species, Species::Sand);
        assert_eq!(sand.clock, 0);
    }

    #[test]
    fn cell_default_is_empty() {
        assert_eq!(Cell::default(), Cell::empty());
    }

    #[test]
    fn cell_equality_covers_species_and_clock() {
        let a = Cell::new(Species::Sand);
        let mut b = Cell::new(Species::Sand);
        assert_eq!(a, b);
        b.clock = 1;
        assert_ne!(a, b);
        assert_ne!(Cell::new(Species::Sand), Cell::new(Species::Water));
    }

    #[test]
    fn species_display() {
        assert_eq!(format!("{}", Species::Sand), "Sand");
        assert_eq!(format!("{}", Species::Empty), "Empty");
        assert_eq!(format!("{}", Cell::new(Species::Water)), "Water");
    }

    #[test]
    fn species_colors() {
        assert_eq!(Species::Empty.rgba(), [0, 0, 0, 0]);
        assert_eq!(Species::Sand.rgba(), [255, 209, 0, 255]);
        assert_eq!(Species::Water.rgba(), [0, 0, 255, 255]);
        assert_eq!(Species::Wall.rgba(), [128, 128, 128, 255]);
    }

    #[test]
    fn only_empty_is_transparent() {
        for species in [Species::Empty, Species::Sand, Species::Water, Species::Wall] {
            let alpha = species.rgba()[3];
            if species == Species::Empty {
                assert_eq!(alpha, 0);
            } else {
                assert_eq!(alpha, 255);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_new_cells_start_unstamped(width in 1usize..=256, height in 1usize..=256) {
            let cells: Vec<Cell> = (0..width * height).map(|_| Cell::empty()).collect();
            for cell in &cells {
                prop_assert_eq!(cell.species, Species::Empty);
                prop_assert_eq!(cell.clock, 0);
            }
        }
    }
}
