//! Region merging through doorway connectors
//!
//! A connector is a wall tile touching two or more distinct regions.
//! Connectors are opened at random until every region is joined. Each
//! opening renames the merged regions to the surviving one in the remaining
//! candidates. Candidates left bridging a single region are dropped, and a
//! few of them are opened anyway as loop doors.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::HashSet;
use log::{debug, trace, warn};

use crate::error::GenError;
use crate::rng::DungeonRng;

use super::grid::{Direction, Grid};
use super::region::RegionCounter;

/// A wall tile bordering several regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub index: usize,
    /// Distinct region ids, in the order their neighbors were probed
    pub regions: Vec<u32>,
}

impl Connector {
    /// Rename every id in `merged` to `primary`, keeping first occurrences
    fn relabel(&mut self, primary: u32, merged: &[u32]) {
        let mut seen = Vec::with_capacity(self.regions.len());
        for id in self.regions.drain(..) {
            let id = if merged.contains(&id) { primary } else { id };
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        self.regions = seen;
    }

    /// True while the connector still joins two or more regions
    pub fn bridges(&self) -> bool {
        self.regions.len() >= 2
    }
}

/// Outcome of connecting regions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectReport {
    pub candidates: usize,
    pub opened: usize,
    pub extra_doors: usize,
}

/// Every inner wall tile adjacent to at least two distinct regions
pub fn find_connectors(grid: &Grid) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            let index = grid.index(x, y);
            if !grid.get(index).is_wall() {
                continue;
            }

            let mut regions: Vec<u32> = Vec::with_capacity(4);
            for dir in Direction::ALL {
                let Some(n) = grid.step(index, dir, 1) else {
                    continue;
                };
                let region = grid.get(n).region;
                if region != 0 && !regions.contains(&region) {
                    regions.push(region);
                }
            }

            if regions.len() >= 2 {
                connectors.push(Connector { index, regions });
            }
        }
    }

    connectors
}

/// Open connectors until every region allocated by `regions` is joined
///
/// Fails with `GenError::Disconnected` if the candidates run out first,
/// which only happens on grids too small for the lattice to cover.
pub fn connect_regions(
    grid: &mut Grid,
    regions: &RegionCounter,
    extra_door_chance: f64,
    rng: &mut DungeonRng,
) -> Result<ConnectReport, GenError> {
    let mut connectors = find_connectors(grid);
    let mut report = ConnectReport {
        candidates: connectors.len(),
        ..Default::default()
    };
    let mut unconnected: HashSet<u32> = regions.ids().collect();

    while unconnected.len() > 1 {
        if connectors.is_empty() {
            warn!(
                "ran out of connectors with {} regions unconnected",
                unconnected.len()
            );
            return Err(GenError::Disconnected {
                remaining: unconnected.len(),
            });
        }

        let chosen = connectors.swap_remove(rng.index(connectors.len()));
        debug_assert!(chosen.bridges());
        let (primary, merged) = (chosen.regions[0], &chosen.regions[1..]);
        grid.get_mut(chosen.index).carve(primary);
        report.opened += 1;
        trace!(
            "opened connector at {:?} joining {:?} into {}",
            grid.position(chosen.index),
            merged,
            primary
        );

        for id in merged {
            unconnected.remove(id);
        }

        let mut kept = Vec::with_capacity(connectors.len());
        for mut connector in connectors.drain(..) {
            connector.relabel(primary, merged);
            if connector.bridges() {
                kept.push(connector);
            } else if rng.chance(extra_door_chance) {
                grid.get_mut(connector.index).carve(connector.regions[0]);
                report.extra_doors += 1;
            }
        }
        connectors = kept;
    }

    debug!(
        "opened {} of {} connectors plus {} extra doors",
        report.opened, report.candidates, report.extra_doors
    );

    Ok(report)
}
