//! Region id allocation
//!
//! Ids start at 1 and only ever grow. Each room and each maze pocket takes
//! exactly one id; 0 is reserved for walls.

use serde::{Deserialize, Serialize};

/// Monotonic region id counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCounter {
    next: u32,
}

impl Default for RegionCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionCounter {
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Id the next carved region will be tagged with
    pub const fn current(&self) -> u32 {
        self.next
    }

    /// Close the current region and move on to a fresh id
    pub fn advance(&mut self) {
        self.next += 1;
    }

    /// Highest id handed out so far, or 0 if none
    pub const fn last_assigned(&self) -> u32 {
        self.next - 1
    }

    /// Number of regions handed out so far
    pub const fn allocated(&self) -> usize {
        (self.next - 1) as usize
    }

    /// Every id handed out so far
    pub fn ids(&self) -> core::ops::RangeInclusive<u32> {
        1..=self.last_assigned()
    }
}
