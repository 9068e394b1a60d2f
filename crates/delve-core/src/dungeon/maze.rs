//! Maze carving (growing-tree)
//!
//! Fills every wall cell left on the odd/odd lattice with corridors. Each
//! walk keeps a stack of live cells, carves two tiles at a time, and prefers
//! to keep going the way it last went, which gives long straight runs.
//! See <http://weblog.jamisbuck.org/2011/1/27/maze-generation-growing-tree-algorithm>.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;
use strum::IntoEnumIterator;

use crate::rng::DungeonRng;

use super::grid::{Direction, Grid};
use super::region::RegionCounter;

/// Wall between and two-step target toward `dir`, if the target stays
/// inside the border ring and is still uncarved
fn open_target(grid: &Grid, cell: usize, dir: Direction) -> Option<(usize, usize)> {
    let target = grid
        .inner_step(cell, dir, 2)
        .filter(|&target| grid.get(target).is_wall())?;
    Some((grid.step(cell, dir, 1)?, target))
}

/// Grow one maze region from `origin`, tagging it with `region`
///
/// `straight_bias` is the probability of reusing the previous direction when
/// it is still open. Returns the number of tiles carved.
pub fn grow_maze(
    grid: &mut Grid,
    origin: usize,
    region: u32,
    straight_bias: f64,
    rng: &mut DungeonRng,
) -> usize {
    grid.get_mut(origin).carve(region);
    let mut carved = 1;

    let mut cells = vec![origin];
    let mut previous: Option<Direction> = None;

    while let Some(&cell) = cells.last() {
        let open: Vec<(Direction, (usize, usize))> = Direction::iter()
            .filter_map(|dir| open_target(grid, cell, dir).map(|steps| (dir, steps)))
            .collect();

        if open.is_empty() {
            cells.pop();
            previous = None;
            continue;
        }

        let straight = previous.and_then(|prev| open.iter().find(|(dir, _)| *dir == prev));
        let &(dir, (between, next)) = match straight {
            Some(step) if rng.chance(straight_bias) => step,
            _ => &open[rng.index(open.len())],
        };

        grid.get_mut(between).carve(region);
        grid.get_mut(next).carve(region);
        carved += 2;

        cells.push(next);
        previous = Some(dir);
    }

    carved
}

/// Carve a maze region from every uncarved odd/odd origin, in row-major order
///
/// Advances `regions` once per region grown. Returns the number of regions.
pub fn carve_mazes(
    grid: &mut Grid,
    regions: &mut RegionCounter,
    straight_bias: f64,
    rng: &mut DungeonRng,
) -> usize {
    let mut pockets = 0;
    let mut carved = 0;

    for y in (1..grid.height().saturating_sub(1)).step_by(2) {
        for x in (1..grid.width().saturating_sub(1)).step_by(2) {
            let origin = grid.index(x, y);
            if grid.get(origin).is_floor() {
                continue;
            }
            carved += grow_maze(grid, origin, regions.current(), straight_bias, rng);
            regions.advance();
            pockets += 1;
        }
    }

    debug!("carved {} maze regions covering {} tiles", pockets, carved);

    pockets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::dungeon::room::place_rooms;

    #[test]
    fn test_open_maze_is_one_region() {
        let mut grid = Grid::new(21, 15);
        let mut regions = RegionCounter::new();
        let mut rng = DungeonRng::new(42);

        let pockets = carve_mazes(&mut grid, &mut regions, 0.75, &mut rng);
        assert_eq!(pockets, 1);
        assert_eq!(regions.current(), 2);
        assert!(grid.is_connected());
        assert!(grid.tiles().iter().all(|t| t.is_wall() || t.region == 1));
    }

    #[test]
    fn test_maze_covers_whole_lattice() {
        for seed in 0..20 {
            let mut grid = Grid::new(31, 21);
            let mut regions = RegionCounter::new();
            let mut rng = DungeonRng::new(seed);
            place_rooms(&mut grid, &mut regions, &GeneratorConfig::default(), &mut rng);
            carve_mazes(&mut grid, &mut regions, 0.75, &mut rng);

            for y in (1..20).step_by(2) {
                for x in (1..30).step_by(2) {
                    assert!(grid.tile(x, y).is_floor(), "seed {}: ({}, {}) left uncarved", seed, x, y);
                }
            }
        }
    }

    #[test]
    fn test_maze_never_touches_border() {
        for seed in 0..20 {
            for (w, h) in [(6, 6), (10, 10), (11, 9), (20, 13)] {
                let mut grid = Grid::new(w, h);
                let mut regions = RegionCounter::new();
                let mut rng = DungeonRng::new(seed);
                carve_mazes(&mut grid, &mut regions, 0.75, &mut rng);
                assert!(grid.border_is_wall(), "seed {} {}x{}", seed, w, h);
            }
        }
    }

    #[test]
    fn test_maze_regions_follow_rooms() {
        let mut grid = Grid::new(41, 41);
        let mut regions = RegionCounter::new();
        let mut rng = DungeonRng::new(5);
        let rooms = place_rooms(&mut grid, &mut regions, &GeneratorConfig::default(), &mut rng);
        let pockets = carve_mazes(&mut grid, &mut regions, 0.75, &mut rng);

        assert!(pockets >= 1);
        assert_eq!(regions.allocated(), rooms.len() + pockets);
        for tile in grid.tiles() {
            if tile.is_floor() {
                assert!(tile.region >= 1 && tile.region <= regions.last_assigned());
            } else {
                assert_eq!(tile.region, 0);
            }
        }
    }

    #[test]
    fn test_grow_maze_isolated_origin() {
        // Every two-step target is already floor; only the origin is carved
        let mut grid = Grid::new(7, 7);
        for (x, y) in [(1, 3), (5, 3), (3, 1), (3, 5)] {
            grid.tile_mut(x, y).carve(1);
        }
        let mut rng = DungeonRng::new(0);
        let origin = grid.index(3, 3);
        assert_eq!(grow_maze(&mut grid, origin, 2, 0.75, &mut rng), 1);
        assert_eq!(grid.get(origin).region, 2);
        assert!(grid.tile(3, 2).is_wall());
    }

    #[test]
    fn test_full_bias_runs_straight() {
        // With a single corridor row, a fully biased walk carves it end to end
        let mut grid = Grid::new(11, 3);
        let mut rng = DungeonRng::new(1);
        let origin = grid.index(1, 1);
        let carved = grow_maze(&mut grid, origin, 1, 1.0, &mut rng);
        assert_eq!(carved, 9);
        for x in 1..10 {
            assert!(grid.tile(x, 1).is_floor());
        }
    }

    /// Lattice cells whose corridor passes straight through them
    fn straight_runs(grid: &Grid) -> usize {
        let mut runs = 0;
        for y in (1..grid.height() - 1).step_by(2) {
            for x in (1..grid.width() - 1).step_by(2) {
                let floor = |dir: Direction| {
                    grid.step(grid.index(x, y), dir, 1)
                        .is_some_and(|n| grid.get(n).is_floor())
                };
                let across = floor(Direction::East) && floor(Direction::West);
                let down = floor(Direction::North) && floor(Direction::South);
                if across != down {
                    runs += 1;
                }
            }
        }
        runs
    }

    #[test]
    fn test_bias_lengthens_straight_corridors() {
        let carve = |bias: f64, seed: u64| {
            let mut grid = Grid::new(41, 41);
            let mut regions = RegionCounter::new();
            let mut rng = DungeonRng::new(seed);
            carve_mazes(&mut grid, &mut regions, bias, &mut rng);
            straight_runs(&grid)
        };

        for seed in 0..8 {
            let biased = carve(1.0, seed);
            let unbiased = carve(0.0, seed);
            assert!(biased > unbiased, "seed {}: {} vs {}", seed, biased, unbiased);
        }
    }
}
