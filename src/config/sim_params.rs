use std::time::Duration;

use bevy::prelude::*;

use super::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_BRUSH_SIZE, FALLING_BLOCKS_INTERVAL,
    LANDING_SAND_INTERVAL,
};
use crate::error::ConfigError;

/// Parameters for one sand variant
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Side of one grid cell, in canvas pixels
    pub cell_size: u32,

    /// Minimum time between two applied ticks
    pub update_interval: Duration,

    /// Side of the square brush, in cells (1 paints only the cursor cell)
    pub brush_size: u32,

    /// When true, a blocked particle tries to slide to one of the two cells diagonally below
    pub diagonal_fall: bool,

    /// Draw an outline for every empty cell
    pub draw_outlines: bool,

    /// Logical canvas the grid covers, in pixels
    pub canvas: UVec2,
}

impl Default for SimParams {
    fn default() -> Self {
        Self::landing_sand()
    }
}

impl SimParams {
    /// One-pixel sand with a 10x10 brush and diagonal sliding
    pub fn landing_sand() -> Self {
        Self {
            cell_size: 1,
            update_interval: LANDING_SAND_INTERVAL,
            brush_size: DEFAULT_BRUSH_SIZE,
            diagonal_fall: true,
            draw_outlines: false,
            canvas: UVec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }

    /// Coarse blocks painted one at a time, falling straight down over a visible grid
    pub fn falling_blocks() -> Self {
        Self {
            cell_size: 10,
            update_interval: FALLING_BLOCKS_INTERVAL,
            brush_size: 1,
            diagonal_fall: false,
            draw_outlines: true,
            canvas: UVec2::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_update_interval(mut self, update_interval: Duration) -> Self {
        self.update_interval = update_interval;
        self
    }

    pub fn with_brush_size(mut self, brush_size: u32) -> Self {
        self.brush_size = brush_size;
        self
    }

    pub fn with_diagonal_fall(mut self, diagonal_fall: bool) -> Self {
        self.diagonal_fall = diagonal_fall;
        self
    }

    pub fn with_outlines(mut self, draw_outlines: bool) -> Self {
        self.draw_outlines = draw_outlines;
        self
    }

    /// Set the canvas from a grid size in cells, keeping the current cell size
    pub fn with_grid_size(mut self, columns: u32, rows: u32) -> Self {
        self.canvas = UVec2::new(columns, rows) * self.cell_size;
        self
    }

    /// Grid dimensions in cells (columns, rows)
    pub fn grid_size(&self) -> UVec2 {
        if self.cell_size == 0 {
            return UVec2::ZERO;
        }
        self.canvas / self.cell_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.canvas.x % self.cell_size != 0 || self.canvas.y % self.cell_size != 0 {
            return Err(ConfigError::CellSizeMismatch {
                canvas: self.canvas,
                cell_size: self.cell_size,
            });
        }
        if self.brush_size == 0 {
            return Err(ConfigError::ZeroBrush);
        }
        Ok(())
    }
}
