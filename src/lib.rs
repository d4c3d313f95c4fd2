use bevy::prelude::*;
use bevy::window::WindowResolution;

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod systems;

// Public re-exports for clean API
pub use crate::config::{SimParams, canvas_size, window_size};
pub use crate::core::{GridSimulator, InputSource, PointerState, Renderer, SandGrid, SimulationClock};
pub use crate::error::ConfigError;
pub use crate::render::PixelCanvas;

use crate::systems::{draw_grid, log_grid_stats, setup_canvas, step_simulation};

/// Steps and draws the `GridSimulator` resource, which must be inserted by the app.
pub struct SandPlugin;

impl Plugin for SandPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_canvas).add_systems(
            Update,
            (step_simulation, draw_grid, log_grid_stats).chain(),
        );
    }
}

/// Open a window for one sand variant and run until it is closed
pub fn run(params: SimParams, title: &str) -> AppExit {
    let mut app = App::new();
    app.insert_resource(ClearColor(Color::BLACK)).add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: title.to_string(),
                    resolution: WindowResolution::from(window_size()),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    let simulator = match GridSimulator::new(params) {
        Ok(simulator) => simulator,
        Err(err) => {
            error!("invalid simulation parameters: {err}");
            return AppExit::error();
        }
    };

    let exit = app.insert_resource(simulator).add_plugins(SandPlugin).run();
    if let AppExit::Error(code) = exit {
        error!("sand runtime exited with code {code}");
    }
    exit
}
