//! Nearest-neighbor downsampling of a source image onto a cell grid.

use crate::quantize::Rgba;
use crate::{Result, TercelError};

/// A decoded raster image, row-major.
#[derive(Clone, Debug)]
pub struct SourceImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl SourceImage {
    /// Build from raw RGBA data (4 bytes per pixel).
    pub fn from_rgba(rgba: &[u8], width: usize, height: usize) -> Result<Self> {
        Self::check_buffer(rgba.len(), width, height, 4)?;
        let pixels = rgba
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from raw RGB data (3 bytes per pixel); alpha defaults to opaque.
    pub fn from_rgb(rgb: &[u8], width: usize, height: usize) -> Result<Self> {
        Self::check_buffer(rgb.len(), width, height, 3)?;
        let pixels = rgb
            .chunks_exact(3)
            .map(|c| Rgba::opaque(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn check_buffer(actual: usize, width: usize, height: usize, channels: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(TercelError::InvalidDimensions { width, height });
        }
        let expected = width * height * channels;
        if actual != expected {
            return Err(TercelError::BufferSizeMismatch { expected, actual });
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }
}

/// The terminal's addressable character dimensions for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetGrid {
    cols: usize,
    rows: usize,
}

impl TargetGrid {
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(TercelError::InvalidGrid { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// Pick one representative source pixel per grid cell, row-major.
///
/// Source coordinates are `floor(x * width / cols)` computed with float
/// division before truncation; integer division first would collapse the
/// scale factor and skew the sampling. Grids larger than the source
/// simply repeat pixels.
pub fn sample(image: &SourceImage, grid: &TargetGrid) -> Vec<Rgba> {
    let mut cells = Vec::with_capacity(grid.cell_count());
    for y in 0..grid.rows() {
        let src_y = (y as f64 * image.height() as f64 / grid.rows() as f64) as usize;
        for x in 0..grid.cols() {
            let src_x = (x as f64 * image.width() as f64 / grid.cols() as f64) as usize;
            cells.push(image.pixel(src_x, src_y));
        }
    }
    cells
}
