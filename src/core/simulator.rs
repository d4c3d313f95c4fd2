use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimParams;
use crate::error::ConfigError;

use super::clock::SimulationClock;
use super::grid::SandGrid;
use super::io::{InputSource, PointerState, Renderer};

/// Aggregate state for the sand simulation: grid, tick clock and random source.
#[derive(Resource)]
pub struct GridSimulator {
    grid: SandGrid,
    // Cells that received a particle during the current settle pass
    arrived: SandGrid,
    clock: SimulationClock,
    params: SimParams,
    rng: StdRng,
}

impl GridSimulator {
    /// A simulator with an OS-seeded random source
    pub fn new(params: SimParams) -> Result<Self, ConfigError> {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// A simulator whose diagonal choices are reproducible
    pub fn seeded(params: SimParams, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: SimParams, rng: StdRng) -> Result<Self, ConfigError> {
        params.validate()?;
        let size = params.grid_size();
        Ok(Self {
            grid: SandGrid::new(size.x, size.y),
            arrived: SandGrid::new(size.x, size.y),
            clock: SimulationClock::new(params.update_interval),
            params,
            rng,
        })
    }

    pub fn grid(&self) -> &SandGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut SandGrid {
        &mut self.grid
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Paint then settle, at most once per update interval.
    /// Returns whether a step was applied.
    pub fn tick(&mut self, now: Duration, pointer: PointerState) -> bool {
        if !self.clock.try_advance(now) {
            return false;
        }

        if pointer.pressed {
            self.paint(pointer.position);
        }
        let moves = self.settle();
        trace!("tick {}: {} moves", self.clock.ticks(), moves);
        true
    }

    pub fn tick_with_input(&mut self, now: Duration, input: &impl InputSource) -> bool {
        self.tick(now, input.pointer_state())
    }

    /// Fill the brush around the cell under `pixel`. A pointer outside the canvas paints nothing.
    /// Returns the number of cells that became occupied.
    pub fn paint(&mut self, pixel: IVec2) -> usize {
        let canvas = self.params.canvas.as_ivec2();
        if pixel.x < 0 || pixel.y < 0 || pixel.x >= canvas.x || pixel.y >= canvas.y {
            return 0;
        }

        let cell = pixel / self.params.cell_size as i32;
        let side = self.params.brush_size as i32;
        let extend = side / 2;

        let mut painted = 0;
        for dx in -extend..side - extend {
            for dy in -extend..side - extend {
                let coord = cell + IVec2::new(dx, dy);
                if self.grid.is_empty_at(coord) {
                    self.grid.set(coord, true);
                    painted += 1;
                }
            }
        }
        painted
    }

    /// One gravity pass. Columns run left to right, rows bottom to top.
    /// A particle moves at most once per pass. Returns the number of moves.
    pub fn settle(&mut self) -> usize {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        if height < 2 {
            return 0;
        }

        self.arrived.clear();
        let mut moves = 0;
        for x in 0..width {
            // The bottom row has nowhere to fall
            for y in (0..height - 1).rev() {
                let here = IVec2::new(x, y);
                if !self.grid.is_occupied(here) || self.arrived.is_occupied(here) {
                    continue;
                }
                if let Some(target) = self.fall_target(here) {
                    self.grid.move_particle(here, target);
                    self.arrived.set(target, true);
                    moves += 1;
                }
            }
        }
        moves
    }

    fn fall_target(&mut self, here: IVec2) -> Option<IVec2> {
        let below = here + IVec2::Y;
        if self.grid.is_empty_at(below) {
            return Some(below);
        }
        if !self.params.diagonal_fall {
            return None;
        }

        // Edge columns only fall straight
        if here.x == 0 || here.x == self.grid.width() as i32 - 1 {
            return None;
        }

        let dir = if self.rng.random_bool(0.5) { 1 } else { -1 };
        [IVec2::new(dir, 1), IVec2::new(-dir, 1)]
            .into_iter()
            .map(|offset| here + offset)
            .find(|&coord| self.grid.is_empty_at(coord))
    }

    /// Emit one draw command per occupied cell, plus outlines for empty cells when enabled
    pub fn render(&self, renderer: &mut impl Renderer) {
        let cell_size = self.params.cell_size;
        for (coord, occupied) in self.grid.iter_cells() {
            let pos = coord * cell_size;
            if occupied {
                renderer.draw_filled(pos);
            } else if self.params.draw_outlines {
                renderer.draw_outline(pos);
            }
        }
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }
}
