use std::fmt;

use bevy::math::UVec2;

/// Rejected simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCellSize,
    /// The canvas is not a whole number of cells
    CellSizeMismatch { canvas: UVec2, cell_size: u32 },
    ZeroBrush,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroCellSize => write!(f, "cell size must be at least one pixel"),
            Self::CellSizeMismatch { canvas, cell_size } => write!(
                f,
                "canvas {}x{} is not a multiple of cell size {}",
                canvas.x, canvas.y, cell_size
            ),
            Self::ZeroBrush => write!(f, "brush size must be at least one cell"),
        }
    }
}

impl std::error::Error for ConfigError {}
