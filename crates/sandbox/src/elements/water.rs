//! Water element: falls, slides diagonally, spreads sideways.
//!
//! One side is rolled per update and reused for both the diagonal and the
//! sideways check. A blocked particle keeps its clock, so it re-rolls on
//! its next eligible tick and probes the other side about half the time;
//! that slow random walk is what levels a pool out.

use crate::api::SandApi;
use crate::cell::{Cell, Species};

pub fn update_water(api: &mut SandApi) {
    let dir = api.random_direction();

    let below = api.get(0, 1);
    if below.species == Species::Empty {
        // Fall straight down
        let me = api.get(0, 0);
        api.set(0, 0, Cell::empty());
        api.set(0, 1, me);
        return;
    }

    let diag = api.get(dir, 1);
    if diag.species == Species::Empty {
        let me = api.get(0, 0);
        api.set(0, 0, Cell::empty());
        api.set(dir, 1, me);
        return;
    }

    // Spread along the surface
    let side = api.get(dir, 0);
    if side.species == Species::Empty {
        let me = api.get(0, 0);
        api.set(0, 0, Cell::empty());
        api.set(dir, 0, me);
    }
}
