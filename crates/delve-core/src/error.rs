//! Generation errors

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Errors reported by the generator
///
/// Every variant is raised before the grid is touched, except
/// `Disconnected`, which only degenerate dimensions can reach. No variant
/// carries a partially built grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("grid {width}x{height} is below the minimum size of {min}x{min}")]
    TooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("grid {width}x{height} has more tiles than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("could not load generator configuration: {0}")]
    Config(String),

    #[error("{remaining} regions left unconnected with no connector candidates")]
    Disconnected { remaining: usize },
}
