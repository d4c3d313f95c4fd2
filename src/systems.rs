use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::{STATS_PERIOD, WINDOW_SCALE};
use crate::core::{GridSimulator, InputSource};
use crate::render::{CanvasBuffer, CanvasImage, PixelCanvas, new_canvas_image};

/// Left mouse button and cursor, mapped from window space onto the canvas
pub struct BevyPointer {
    pressed: bool,
    cursor: Option<Vec2>,
}

impl BevyPointer {
    pub fn new(window: Option<&Window>, mouse: &ButtonInput<MouseButton>, canvas: UVec2) -> Self {
        let cursor = window.and_then(|window| {
            let cursor = window.cursor_position()?;
            let window_size = Vec2::new(window.width(), window.height());
            if window_size.x <= 0.0 || window_size.y <= 0.0 {
                return None;
            }
            Some(cursor * canvas.as_vec2() / window_size)
        });

        Self {
            pressed: mouse.pressed(MouseButton::Left),
            cursor,
        }
    }
}

impl InputSource for BevyPointer {
    fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn cursor_position(&self) -> Option<IVec2> {
        self.cursor.map(|cursor| cursor.floor().as_ivec2())
    }
}

pub fn setup_canvas(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    simulator: Res<GridSimulator>,
) {
    let params = simulator.params();
    let handle = images.add(new_canvas_image(params.canvas));

    commands.spawn(Camera2d);
    commands.spawn((
        Sprite::from_image(handle.clone()),
        Transform::from_scale(Vec3::splat(WINDOW_SCALE as f32)),
    ));
    commands.insert_resource(CanvasImage(handle));
    commands.insert_resource(CanvasBuffer(PixelCanvas::new(params.canvas, params.cell_size)));

    let grid = simulator.grid().size();
    info!(
        "sand grid {}x{} (cell {}px, interval {:?}, brush {}, diagonal fall {})",
        grid.x,
        grid.y,
        params.cell_size,
        params.update_interval,
        params.brush_size,
        params.diagonal_fall
    );
}

pub fn step_simulation(
    time: Res<Time>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut simulator: ResMut<GridSimulator>,
) {
    let canvas = simulator.params().canvas;
    let pointer = BevyPointer::new(windows.single().ok(), &mouse, canvas);

    if mouse.just_pressed(MouseButton::Left) {
        debug!("paint stroke at {:?}", pointer.cursor_position());
    }

    simulator.tick_with_input(time.elapsed(), &pointer);
}

pub fn draw_grid(
    simulator: Res<GridSimulator>,
    mut buffer: ResMut<CanvasBuffer>,
    canvas: Res<CanvasImage>,
    mut images: ResMut<Assets<Image>>,
) {
    let pixels = &mut buffer.0;
    pixels.clear();
    simulator.render(pixels);

    if let Some(image) = images.get_mut(&canvas.0) {
        image.data = Some(pixels.pixels().to_vec());
    }
}

pub fn log_grid_stats(simulator: Res<GridSimulator>, mut frame: Local<u32>) {
    if *frame % STATS_PERIOD == 0 {
        debug!(
            "[frame {:05}] ticks={} occupied={}",
            *frame,
            simulator.clock().ticks(),
            simulator.occupied_count()
        );
    }

    *frame = frame.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_without_window_does_not_paint() {
        let mouse = ButtonInput::<MouseButton>::default();
        let pointer = BevyPointer::new(None, &mouse, UVec2::new(400, 400));
        assert!(!pointer.is_pressed());
        assert_eq!(pointer.cursor_position(), None);
        assert!(!pointer.pointer_state().pressed);
    }

    #[test]
    fn pressed_button_is_reported() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        let pointer = BevyPointer::new(None, &mouse, UVec2::new(400, 400));
        assert!(pointer.is_pressed());
        // No cursor over the window, so nothing is painted
        assert!(!pointer.pointer_state().pressed);
    }
}
