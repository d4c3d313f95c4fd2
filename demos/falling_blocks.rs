// Coarse variant: 10px blocks painted one at a time, falling straight down over a grid.
use bevy::prelude::*;
use sand2d::SimParams;

const TITLE: &str = "## Falling Blocks ##";

fn main() -> AppExit {
    sand2d::run(SimParams::falling_blocks(), TITLE)
}
