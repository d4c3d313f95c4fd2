//! Seams between the simulation and whatever windowing runtime hosts it.

use bevy::math::{IVec2, UVec2};

/// Pointer snapshot for one tick, in canvas pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    pub pressed: bool,
    pub position: IVec2,
}

impl PointerState {
    pub fn released() -> Self {
        Self::default()
    }

    pub fn pressed_at(x: i32, y: i32) -> Self {
        Self {
            pressed: true,
            position: IVec2::new(x, y),
        }
    }
}

/// Polled once per tick
pub trait InputSource {
    /// Primary button held
    fn is_pressed(&self) -> bool;

    /// Cursor in canvas pixels, `None` when it is not over the canvas window
    fn cursor_position(&self) -> Option<IVec2>;

    fn pointer_state(&self) -> PointerState {
        match self.cursor_position() {
            Some(position) => PointerState {
                pressed: self.is_pressed(),
                position,
            },
            None => PointerState::released(),
        }
    }
}

/// Receives one draw command per cell; positions are the cell's top-left corner in canvas pixels
pub trait Renderer {
    fn draw_filled(&mut self, pos: UVec2);

    fn draw_outline(&mut self, pos: UVec2);
}

/// `InputSource` that always reports the same pointer
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedInput(pub PointerState);

impl InputSource for FixedInput {
    fn is_pressed(&self) -> bool {
        self.0.pressed
    }

    fn cursor_position(&self) -> Option<IVec2> {
        Some(self.0.position)
    }
}
