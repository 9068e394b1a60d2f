//! Axis-aligned rectangles for room placement

use serde::{Deserialize, Serialize};

/// Rectangle by top-left corner and size, covering `x..x + width`
/// and `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Open-interval overlap: rectangles sharing only an edge do not overlap
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.x
            && self.x < other.right()
            && self.bottom() > other.y
            && self.y < other.bottom()
    }

    /// Drop the top row and left column, leaving a one-tile margin on every
    /// side once neighbors share an edge
    pub const fn shrink(&self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(1),
            height: self.height.saturating_sub(1),
        }
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Every `(x, y)` inside, row by row
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self;
        (y..y + height).flat_map(move |cy| (x..x + width).map(move |cx| (cx, cy)))
    }
}
