//! Layout generation pipeline
//!
//! Rooms, then mazes, then connectors, then culling, all on one grid owned
//! by the generator. The caller only ever sees the finished [`Dungeon`].

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::rng::DungeonRng;
use crate::MIN_DIMENSION;

use super::connector::connect_regions;
use super::cull::cull_dead_ends;
use super::grid::Grid;
use super::maze::carve_mazes;
use super::region::RegionCounter;
use super::room::place_rooms;
use super::tile::Tile;

/// Counts gathered while generating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms: usize,
    pub maze_regions: usize,
    pub connectors_found: usize,
    pub connectors_opened: usize,
    pub extra_doors: usize,
    pub culled_cells: usize,
}

impl GenerationStats {
    /// Regions carved before merging
    pub fn regions(&self) -> usize {
        self.rooms + self.maze_regions
    }
}

/// A finished layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    grid: Grid,
    stats: GenerationStats,
}

impl Dungeon {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Row-major tiles, addressed by `x + y * width`
    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        self.grid.tile(x, y)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn floor_count(&self) -> usize {
        self.grid.floor_count()
    }

    pub fn is_connected(&self) -> bool {
        self.grid.is_connected()
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.grid.into_tiles()
    }
}

/// Validated dimensions and config, ready to generate
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    width: usize,
    height: usize,
    config: GeneratorConfig,
}

impl DungeonGenerator {
    /// Generator with the default config
    pub fn new(width: usize, height: usize) -> Result<Self, GenError> {
        Self::with_config(width, height, GeneratorConfig::default())
    }

    /// Both dimensions must be at least [`MIN_DIMENSION`]; odd sizes use
    /// the last row and column that even sizes leave as solid wall
    pub fn with_config(
        width: usize,
        height: usize,
        config: GeneratorConfig,
    ) -> Result<Self, GenError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GenError::TooSmall {
                width,
                height,
                min: MIN_DIMENSION,
            });
        }
        if width.checked_mul(height).is_none() {
            return Err(GenError::TooLarge { width, height });
        }
        config.validate()?;

        Ok(Self {
            width,
            height,
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every phase on a fresh grid
    pub fn generate(&self, rng: &mut DungeonRng) -> Result<Dungeon, GenError> {
        let mut grid = Grid::new(self.width, self.height);
        let mut regions = RegionCounter::new();
        let mut stats = GenerationStats::default();

        stats.rooms = place_rooms(&mut grid, &mut regions, &self.config, rng).len();
        stats.maze_regions = carve_mazes(&mut grid, &mut regions, self.config.straight_bias, rng);

        let report = connect_regions(&mut grid, &regions, self.config.extra_door_chance, rng)?;
        stats.connectors_found = report.candidates;
        stats.connectors_opened = report.opened;
        stats.extra_doors = report.extra_doors;

        stats.culled_cells = cull_dead_ends(&mut grid, self.config.cull_passes);

        debug!(
            "generated {}x{} dungeon (seed {}): {:?}",
            self.width,
            self.height,
            rng.seed(),
            stats
        );

        Ok(Dungeon { grid, stats })
    }
}

/// Generate a dungeon with the default config
pub fn generate(width: usize, height: usize, rng: &mut DungeonRng) -> Result<Dungeon, GenError> {
    DungeonGenerator::new(width, height)?.generate(rng)
}
