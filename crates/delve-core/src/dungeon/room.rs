//! Room placement
//!
//! Scatters non-overlapping rectangles on even coordinates, then carves each
//! one, less its top row and left column, as a floor region of its own.
//! Even corners and even sizes put every room interior on the odd lattice the
//! maze carver works on, so rooms and corridors line up one wall apart.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;

use crate::config::GeneratorConfig;
use crate::rng::DungeonRng;

use super::grid::Grid;
use super::rect::Rect;
use super::region::RegionCounter;

/// Draw one candidate room, or `None` if the drawn size does not fit
fn candidate(grid: &Grid, config: &GeneratorConfig, rng: &mut DungeonRng) -> Option<Rect> {
    let width = *rng.choose(&config.room_sizes)?;
    let height = *rng.choose(&config.room_sizes)?;

    // Even slots strictly left of `grid.width() - width`
    let x_slots = (grid.width().checked_sub(width)? + 1) / 2;
    let y_slots = (grid.height().checked_sub(height)? + 1) / 2;
    if x_slots == 0 || y_slots == 0 {
        return None;
    }

    let x = 2 * rng.index(x_slots);
    let y = 2 * rng.index(y_slots);
    Some(Rect::new(x, y, width, height))
}

/// Place and carve rooms, returning the carved (shrunk) rectangles
///
/// Makes up to `room_attempts_per_room` attempts per target room and stops
/// early once the target is met, so fewer rooms than targeted is normal.
/// Advances `regions` once per room.
pub fn place_rooms(
    grid: &mut Grid,
    regions: &mut RegionCounter,
    config: &GeneratorConfig,
    rng: &mut DungeonRng,
) -> Vec<Rect> {
    let target = config.target_rooms(grid.width(), grid.height());
    let attempts = target * config.room_attempts_per_room;
    let mut rooms: Vec<Rect> = Vec::with_capacity(target);

    for _ in 0..attempts {
        if rooms.len() >= target {
            break;
        }
        let Some(room) = candidate(grid, config, rng) else {
            continue;
        };
        if rooms.iter().any(|placed| room.overlaps(placed)) {
            continue;
        }
        rooms.push(room);
    }

    let carved: Vec<Rect> = rooms.iter().map(Rect::shrink).collect();
    for room in &carved {
        let region = regions.current();
        for (x, y) in room.cells() {
            grid.tile_mut(x, y).carve(region);
        }
        regions.advance();
    }

    debug!(
        "placed {} of {} target rooms in {} attempts",
        carved.len(),
        target,
        attempts
    );

    carved
}
