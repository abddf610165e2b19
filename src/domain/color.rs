//! Cell colors.
//!
//! Two sources exist: the coordinate hash used for drawing, and the
//! green spectrum indexed by neighbor count that tags cell metadata.

use std::fmt;

/// 8-bit RGBA color, laid out the way the raster stores pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Bytes in raster order
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Shades of green from bright (0 neighbors) to near black (7 neighbors)
pub const GREEN_SPECTRUM: [Rgba; 8] = [
    Rgba::opaque(0x00, 0xFF, 0x00),
    Rgba::opaque(0x00, 0xEE, 0x00),
    Rgba::opaque(0x00, 0xCC, 0x00),
    Rgba::opaque(0x00, 0xAA, 0x00),
    Rgba::opaque(0x00, 0x88, 0x00),
    Rgba::opaque(0x00, 0x66, 0x00),
    Rgba::opaque(0x00, 0x44, 0x00),
    Rgba::opaque(0x00, 0x22, 0x00),
];

/// Spectrum shade for a neighbor count; 8 shares the darkest shade
pub const fn spectrum_color(neighbors: u8) -> Rgba {
    let idx = if neighbors as usize >= GREEN_SPECTRUM.len() {
        GREEN_SPECTRUM.len() - 1
    } else {
        neighbors as usize
    };
    GREEN_SPECTRUM[idx]
}

/// Pseudo-random color of a cell, a pure function of its coordinates.
/// Each channel is `(x * y * k) mod 255`, reduced modulo 255 at every
/// multiplication so the result is exact for any coordinate.
pub const fn cell_color(x: usize, y: usize) -> Rgba {
    let product = (x as u64 % 255) * (y as u64 % 255) % 255;
    Rgba::opaque(
        channel(product, 1_234_567),
        channel(product, 7_654_321),
        channel(product, 9_876_543),
    )
}

const fn channel(product: u64, factor: u64) -> u8 {
    (product * (factor % 255) % 255) as u8
}
