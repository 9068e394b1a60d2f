//! delve-core: room-and-maze dungeon layout generation
//!
//! Produces a fixed-size grid of wall and floor tiles in four phases:
//! rooms are scattered, the remaining space is filled with growing-tree
//! mazes, every region is joined through doorway connectors, and dead-end
//! corridor stubs are culled. The crate does no rendering and no I/O beyond
//! optional config loading.
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! File loading and entropy seeding are gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;
pub mod error;
mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{generate, Dungeon, DungeonGenerator, GenerationStats, Tile, TileKind};
pub use error::GenError;
pub use rng::DungeonRng;

/// Smallest accepted width or height.
///
/// Below this the odd lattice holds too few cells for rooms or mazes to be
/// joined reliably.
pub const MIN_DIMENSION: usize = 6;
