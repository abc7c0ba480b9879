//! Reduction of 24-bit pixels to a terminal color model.
//!
//! The reduced modes run a linear nearest-neighbor scan over the mode's
//! reference palette using a luma-weighted squared distance, so the
//! match tracks perceived brightness rather than raw channel error.

use crate::palette::{ColorMode, Rgb};

/// Alpha values at or above this are treated as fully opaque; anything
/// below renders as a transparent cell (the terminal background shows
/// through). There is no partial blending.
pub const OPAQUE_ALPHA_MIN: u8 = 250;

/// One source pixel. Decoders without an alpha channel supply 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_opaque(self) -> bool {
        self.a >= OPAQUE_ALPHA_MIN
    }
}

/// The resolved color for one terminal cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    /// The terminal's default background shows through.
    Transparent,
    /// A direct 24-bit color (truecolor mode).
    Rgb(Rgb),
    /// An index into the mode's reference palette (reduced modes).
    Indexed(u8),
}

/// Resolve one pixel against a color mode.
///
/// Pure and deterministic: the same pixel and mode always produce the
/// same cell color.
pub fn quantize(pixel: Rgba, mode: ColorMode) -> CellColor {
    if !pixel.is_opaque() {
        return CellColor::Transparent;
    }
    match mode.reference_palette() {
        None => CellColor::Rgb(Rgb::new(pixel.r, pixel.g, pixel.b)),
        Some(palette) => CellColor::Indexed(nearest_index(pixel, palette)),
    }
}

/// Luma-weighted squared distance, in milli-units so the 0.299/0.587/0.114
/// weights stay in integer arithmetic. Deltas are widened to i32 before
/// squaring; palette channels may exceed the pixel's.
fn weighted_distance(pixel: Rgba, candidate: Rgb) -> u32 {
    let dr = i32::from(pixel.r) - i32::from(candidate.r);
    let dg = i32::from(pixel.g) - i32::from(candidate.g);
    let db = i32::from(pixel.b) - i32::from(candidate.b);
    (299 * dr * dr + 587 * dg * dg + 114 * db * db) as u32
}

/// Index of the palette entry nearest to `pixel`.
///
/// Ties keep the lowest index (strict `<` comparison). The palette must
/// be non-empty; every [`ColorMode`] reference palette is.
pub fn nearest_index(pixel: Rgba, palette: &[Rgb]) -> u8 {
    debug_assert!(!palette.is_empty());
    let mut best = 0usize;
    let mut best_dist = u32::MAX;
    for (i, &candidate) in palette.iter().enumerate() {
        let dist = weighted_distance(pixel, candidate);
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best as u8
}
