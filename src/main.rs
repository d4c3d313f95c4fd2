use bevy::prelude::*;
use sand2d::SimParams;
use sand2d::config::WINDOW_TITLE;

fn main() -> AppExit {
    sand2d::run(SimParams::landing_sand(), WINDOW_TITLE)
}
