//! Sand element: falls down, then diagonally; sinks through Water by swapping.

use crate::api::SandApi;
use crate::cell::{Cell, Species};

pub fn update_sand(api: &mut SandApi) {
    let dir = api.random_direction();

    let below = api.get(0, 1);
    if below.species == Species::Empty {
        // Fall straight down
        let me = api.get(0, 0);
        api.set(0, 0, Cell::empty());
        api.set(0, 1, me);
        return;
    }

    // Slide one row down toward the rolled side
    let diag = api.get(dir, 1);
    if diag.species == Species::Empty {
        let me = api.get(0, 0);
        api.set(0, 0, Cell::empty());
        api.set(dir, 1, me);
        return;
    }

    // Denser than water: swap places with the cell below. The diagonal
    // check runs first on purpose; reordering changes how piles submerge.
    if below.species == Species::Water {
        let me = api.get(0, 0);
        api.set(0, 0, below);
        api.set(0, 1, me);
    }
}
