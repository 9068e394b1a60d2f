//! Dungeon layout
//!
//! Contains the tile grid and the four generation phases.

mod connector;
mod cull;
mod generator;
mod grid;
mod maze;
mod rect;
mod region;
mod room;
mod tile;

pub use connector::{connect_regions, find_connectors, ConnectReport, Connector};
pub use cull::{cull_dead_ends, cull_pass};
pub use generator::{generate, Dungeon, DungeonGenerator, GenerationStats};
pub use grid::{Direction, Grid};
pub use maze::{carve_mazes, grow_maze};
pub use rect::Rect;
pub use region::RegionCounter;
pub use room::place_rooms;
pub use tile::{Tile, TileKind};
