//! CPU rasterizer for the grid and the Bevy texture it is shown through.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::config::{BACKGROUND_COLOR, OUTLINE_COLOR, SAND_COLOR};
use crate::core::Renderer;

const BYTES_PER_PIXEL: usize = 4;

/// RGBA8 pixel buffer the size of the canvas
pub struct PixelCanvas {
    size: UVec2,
    cell_size: u32,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(size: UVec2, cell_size: u32) -> Self {
        let mut canvas = Self {
            size,
            cell_size,
            pixels: vec![0; size.x as usize * size.y as usize * BYTES_PER_PIXEL],
        };
        canvas.clear();
        canvas
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&BACKGROUND_COLOR);
        }
    }

    /// Color at a pixel, `None` outside the canvas
    pub fn pixel(&self, pos: UVec2) -> Option<[u8; 4]> {
        let start = self.offset(pos)?;
        let mut color = [0; 4];
        color.copy_from_slice(&self.pixels[start..start + BYTES_PER_PIXEL]);
        Some(color)
    }

    fn offset(&self, pos: UVec2) -> Option<usize> {
        if pos.x >= self.size.x || pos.y >= self.size.y {
            return None;
        }
        Some((pos.y as usize * self.size.x as usize + pos.x as usize) * BYTES_PER_PIXEL)
    }

    fn put(&mut self, pos: UVec2, color: [u8; 4]) {
        if let Some(start) = self.offset(pos) {
            self.pixels[start..start + BYTES_PER_PIXEL].copy_from_slice(&color);
        }
    }
}

impl Renderer for PixelCanvas {
    fn draw_filled(&mut self, pos: UVec2) {
        for dy in 0..self.cell_size {
            for dx in 0..self.cell_size {
                self.put(pos + UVec2::new(dx, dy), SAND_COLOR);
            }
        }
    }

    fn draw_outline(&mut self, pos: UVec2) {
        let last = self.cell_size.saturating_sub(1);
        for i in 0..self.cell_size {
            self.put(pos + UVec2::new(i, 0), OUTLINE_COLOR);
            self.put(pos + UVec2::new(i, last), OUTLINE_COLOR);
            self.put(pos + UVec2::new(0, i), OUTLINE_COLOR);
            self.put(pos + UVec2::new(last, i), OUTLINE_COLOR);
        }
    }
}

/// Handle to the texture the canvas is uploaded into every frame
#[derive(Resource)]
pub struct CanvasImage(pub Handle<Image>);

/// Frame-persistent pixel buffer
#[derive(Resource)]
pub struct CanvasBuffer(pub PixelCanvas);

pub fn new_canvas_image(size: UVec2) -> Image {
    let mut image = Image::new_fill(
        Extent3d {
            width: size.x,
            height: size.y,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &BACKGROUND_COLOR,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::nearest();
    image
}
