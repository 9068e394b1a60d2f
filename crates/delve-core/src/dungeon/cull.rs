//! Dead-end culling
//!
//! A floor tile with three or four wall neighbors is the tip of a dead end
//! and gets walled back up. Passes update the grid in place, so a single
//! pass can already eat into a stub along the scan direction.

use log::debug;

use super::grid::Grid;

/// Run one pass, returning the number of tiles walled up
///
/// Scans rows `1..height - 1` and columns `2..width - 1`: the first inner
/// column is never culled.
pub fn cull_pass(grid: &mut Grid) -> usize {
    let mut culled = 0;

    for y in 1..grid.height().saturating_sub(1) {
        for x in 2..grid.width().saturating_sub(1) {
            let index = grid.index(x, y);
            if grid.get(index).is_floor() && grid.wall_neighbors(index) > 2 {
                grid.get_mut(index).fill();
                culled += 1;
            }
        }
    }

    culled
}

/// Run `passes` culling passes, returning the total tiles walled up
pub fn cull_dead_ends(grid: &mut Grid, passes: usize) -> usize {
    let mut culled = 0;
    for _ in 0..passes {
        culled += cull_pass(grid);
    }

    debug!("culled {} dead-end tiles in {} passes", culled, passes);

    culled
}
