use rayon::prelude::*;
use crate::domain::{CELL_SIZE, CellRegistry, Grid, Rgba, cell_color};
use super::Palette;

const BYTES_PER_PIXEL: usize = 4;

/// Software RGBA surface the size of the viewport.
/// This is what gets shown on screen and what snapshots encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent surface
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw row-major RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at position, None when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * BYTES_PER_PIXEL;
        let px = &self.pixels[idx..idx + BYTES_PER_PIXEL];
        Some(Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Clear the surface and paint every live cell as a CELL_SIZE square.
    /// Squares crossing the surface edge are clipped.
    pub fn render(&mut self, grid: &Grid, registry: &CellRegistry, palette: Palette) {
        self.clear();
        if self.width == 0 {
            return;
        }

        let (grid_width, grid_height) = grid.dimensions();
        let row_bytes = self.width * BYTES_PER_PIXEL;
        let columns = grid_width.min(self.width.div_ceil(CELL_SIZE));

        self.pixels
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(py, row)| {
                let gy = py / CELL_SIZE;
                if gy >= grid_height {
                    return;
                }
                for gx in (0..columns).filter(|&gx| grid.is_alive(gx, gy)) {
                    let color = cell_fill(gx, gy, registry, palette).to_bytes();
                    let start = gx * CELL_SIZE;
                    let end = (start + CELL_SIZE).min(row_bytes / BYTES_PER_PIXEL);
                    row[start * BYTES_PER_PIXEL..end * BYTES_PER_PIXEL]
                        .chunks_exact_mut(BYTES_PER_PIXEL)
                        .for_each(|px| px.copy_from_slice(&color));
                }
            });
    }
}

/// Fill color of a live cell under the given palette
fn cell_fill(x: usize, y: usize, registry: &CellRegistry, palette: Palette) -> Rgba {
    match palette {
        Palette::Coordinate => cell_color(x, y),
        Palette::Spectrum => registry
            .get(x, y)
            .map(|meta| meta.color)
            .unwrap_or_else(|| cell_color(x, y)),
    }
}
