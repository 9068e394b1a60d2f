//! Tile storage and index arithmetic
//!
//! Tiles are kept row-major; index `i = x + y * width`. All direction math
//! goes through [`Grid::step`], which refuses to leave the grid.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::tile::Tile;

/// Orthogonal directions, in the order they are probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset `(dx, dy)`; y grows southward
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Fixed-size tile grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid of walls
    ///
    /// Callers validate the dimensions; see `DungeonGenerator::new`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::WALL; width * height],
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        x + y * self.width
    }

    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Tile at `(x, y)`; panics when out of bounds
    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let i = self.index(x, y);
        &mut self.tiles[i]
    }

    /// Tile at a flat index; panics when out of bounds
    pub fn get(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    /// True on the outermost ring of rows and columns
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// True strictly inside the border ring
    pub fn is_inner(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x + 1 < self.width && y + 1 < self.height
    }

    /// Index `distance` tiles from `index` toward `dir`, if still on the grid
    pub fn step(&self, index: usize, dir: Direction, distance: usize) -> Option<usize> {
        let (x, y) = self.position(index);
        let (dx, dy) = dir.offset();
        let nx = x.checked_add_signed(dx * distance as isize)?;
        let ny = y.checked_add_signed(dy * distance as isize)?;
        if nx >= self.width || ny >= self.height {
            return None;
        }
        Some(self.index(nx, ny))
    }

    /// Like [`Grid::step`], but the target must also avoid the border ring
    pub fn inner_step(&self, index: usize, dir: Direction, distance: usize) -> Option<usize> {
        let target = self.step(index, dir, distance)?;
        let (x, y) = self.position(target);
        self.is_inner(x, y).then_some(target)
    }

    /// Orthogonal neighbors that exist on the grid
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(index, dir, 1))
    }

    /// Number of orthogonal neighbors that are wall; off-grid counts as wall
    pub fn wall_neighbors(&self, index: usize) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&dir| {
                self.step(index, dir, 1)
                    .is_none_or(|n| self.tiles[n].is_wall())
            })
            .count()
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_floor()).count()
    }

    /// Number of 4-connected floor components
    pub fn floor_components(&self) -> usize {
        let mut visited = vec![false; self.tiles.len()];
        let mut components = 0;
        let mut stack = Vec::new();

        for start in 0..self.tiles.len() {
            if visited[start] || !self.tiles[start].is_floor() {
                continue;
            }
            components += 1;
            visited[start] = true;
            stack.push(start);

            while let Some(current) = stack.pop() {
                for next in self.neighbors(current) {
                    if !visited[next] && self.tiles[next].is_floor() {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }

        components
    }

    /// True when every floor tile is reachable from every other
    pub fn is_connected(&self) -> bool {
        self.floor_components() <= 1
    }

    /// True when no tile on the border ring is floor
    pub fn border_is_wall(&self) -> bool {
        self.tiles.iter().enumerate().all(|(i, t)| {
            let (x, y) = self.position(i);
            !self.is_border(x, y) || t.is_wall()
        })
    }
}
