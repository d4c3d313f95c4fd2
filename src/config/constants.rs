// Canvas and window constants shared by both sand variants
use std::time::Duration;

use bevy::prelude::*;

// Logical canvas, in pixels
pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 400;

// The window is this many times larger than the canvas
pub const WINDOW_SCALE: u32 = 2;

pub const WINDOW_TITLE: &str = "## Landing Sand ##";

// Brush
pub const DEFAULT_BRUSH_SIZE: u32 = 10;

// Tick cadence
pub const LANDING_SAND_INTERVAL: Duration = Duration::from_millis(5);
pub const FALLING_BLOCKS_INTERVAL: Duration = Duration::from_millis(50);

// Pixel colors (RGBA8)
pub const SAND_COLOR: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
pub const OUTLINE_COLOR: [u8; 4] = [0x40, 0x40, 0x40, 0xFF];
pub const BACKGROUND_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

/// Frames between two grid stats log lines
pub const STATS_PERIOD: u32 = 120;

/// The fixed logical canvas size, regardless of the window size.
pub fn canvas_size() -> UVec2 {
    UVec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

pub fn window_size() -> UVec2 {
    canvas_size() * WINDOW_SCALE
}
