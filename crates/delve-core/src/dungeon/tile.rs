//! Tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile terrain
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 0,
    Floor = 1,
}

impl TileKind {
    pub const fn is_floor(&self) -> bool {
        matches!(self, TileKind::Floor)
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// A single grid cell
///
/// `region` is 0 for walls and the connected-component label (>= 1) the
/// tile was carved under for floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub region: u32,
}

impl Tile {
    pub const WALL: Tile = Tile {
        kind: TileKind::Wall,
        region: 0,
    };

    /// A floor tile belonging to `region`
    pub const fn floor(region: u32) -> Self {
        Self {
            kind: TileKind::Floor,
            region,
        }
    }

    pub const fn is_floor(&self) -> bool {
        self.kind.is_floor()
    }

    pub const fn is_wall(&self) -> bool {
        self.kind.is_wall()
    }

    /// Turn this tile into floor tagged with `region`
    pub fn carve(&mut self, region: u32) {
        self.kind = TileKind::Floor;
        self.region = region;
    }

    /// Turn this tile back into wall, clearing its region
    pub fn fill(&mut self) {
        *self = Tile::WALL;
    }
}
