//! # tercel
//!
//! A library for rendering raster images as colored cell mosaics in a
//! text terminal.
//!
//! Each terminal cell is painted with the background color of one source
//! pixel, picked by nearest-neighbor downsampling. The cell color is
//! either emitted as 24-bit truecolor or reduced to one of the classic
//! terminal palettes (8, 16 or 256 colors) with a luma-weighted
//! nearest-color search.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tercel::{render_image, ColorMode, SourceImage, TargetGrid};
//!
//! // RGBA image data (4 bytes per pixel)
//! let rgba = vec![255u8, 0, 0, 255, 0, 255, 0, 255]; // red and green pixels
//! let image = SourceImage::from_rgba(&rgba, 2, 1)?;
//! let grid = TargetGrid::new(2, 1)?;
//! let frame = render_image(&image, &grid, ColorMode::Truecolor)?;
//! print!("{}", frame);
//! ```

use thiserror::Error;

pub mod palette;
pub mod quantize;
pub mod render;
pub mod sample;

pub use palette::{palette_256, ColorMode, Rgb, PALETTE_16, PALETTE_8};
pub use quantize::{nearest_index, quantize, CellColor, Rgba, OPAQUE_ALPHA_MIN};
pub use render::{render, render_image};
pub use sample::{sample, SourceImage, TargetGrid};

/// Errors that can occur while building a frame.
#[derive(Debug, Error)]
pub enum TercelError {
    /// Invalid source image dimensions (width or height is zero)
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Invalid target grid (zero columns or rows)
    #[error("invalid grid: {cols}x{rows} cells")]
    InvalidGrid { cols: usize, rows: usize },
}

/// Result type for tercel operations.
pub type Result<T> = core::result::Result<T, TercelError>;
