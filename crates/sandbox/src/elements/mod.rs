//! Per-element update functions dispatched from the tick loop.

mod sand;
mod water;


use crate::api::SandApi;
use crate::cell::Species;

/// Dispatch to the appropriate element update function.
///
/// Wall and Empty are no-ops and should be skipped before calling this.
pub fn update_cell(species: Species, api: &mut SandApi) {
    match species {
        Species::Sand => sand::update_sand(api),
        Species::Water => water::update_water(api),
        Species::Empty | Species::Wall => {}
    }
}
