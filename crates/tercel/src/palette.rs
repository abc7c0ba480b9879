//! Terminal color models and their fixed reference palettes.
//!
//! The reduced modes each carry an ordered lookup table of representative
//! sRGB colors. The 8- and 16-color tables are literal data; the
//! 256-color table is derived once per process from the xterm formulas
//! (16 base colors, a 6x6x6 cube, a 24-step gray ramp) and never mutated
//! afterwards.

use std::sync::OnceLock;

/// An opaque 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The color representation a frame is rendered into.
///
/// The reduced variants constrain every cell to a fixed reference
/// palette; `Truecolor` passes 24-bit values straight through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Truecolor,
    Indexed8,
    Indexed16,
    Indexed256,
}

/// The 8 primary/secondary colors selectable via SGR 40-47.
pub const PALETTE_8: [Rgb; 8] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(255, 0, 0),     // red
    Rgb::new(0, 255, 0),     // green
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(255, 255, 255), // white
];

/// The 16 ANSI colors (8 normal + 8 bright), using the sRGB values
/// common to xterm-compatible terminals.
pub const PALETTE_16: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(205, 0, 0),     // red
    Rgb::new(0, 205, 0),     // green
    Rgb::new(205, 205, 0),   // yellow
    Rgb::new(0, 0, 238),     // blue
    Rgb::new(205, 0, 205),   // magenta
    Rgb::new(0, 205, 205),   // cyan
    Rgb::new(229, 229, 229), // white
    Rgb::new(127, 127, 127), // bright black
    Rgb::new(255, 0, 0),     // bright red
    Rgb::new(0, 255, 0),     // bright green
    Rgb::new(255, 255, 0),   // bright yellow
    Rgb::new(92, 92, 255),   // bright blue
    Rgb::new(255, 0, 255),   // bright magenta
    Rgb::new(0, 255, 255),   // bright cyan
    Rgb::new(255, 255, 255), // bright white
];

/// Channel intensities of the 6x6x6 cube (indices 16-231).
const CUBE_RAMP: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

static PALETTE_256: OnceLock<[Rgb; 256]> = OnceLock::new();

/// The standard 256-color terminal palette.
///
/// Built on first use, identical across processes: indices 0-15 mirror
/// [`PALETTE_16`], index `16 + 36r + 6g + b` (r,g,b in 0..6) maps to the
/// cube ramp, and indices 232-255 are the grays `8 + 10i`.
pub fn palette_256() -> &'static [Rgb; 256] {
    PALETTE_256.get_or_init(|| {
        let mut table = [Rgb::new(0, 0, 0); 256];
        table[..16].copy_from_slice(&PALETTE_16);
        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    table[16 + 36 * r + 6 * g + b] =
                        Rgb::new(CUBE_RAMP[r], CUBE_RAMP[g], CUBE_RAMP[b]);
                }
            }
        }
        for i in 0..24u8 {
            let level = 8 + 10 * i;
            table[232 + i as usize] = Rgb::new(level, level, level);
        }
        table
    })
}

impl ColorMode {
    /// The ordered reference palette for nearest-color search, or `None`
    /// for truecolor.
    pub fn reference_palette(self) -> Option<&'static [Rgb]> {
        match self {
            ColorMode::Truecolor => None,
            ColorMode::Indexed8 => Some(&PALETTE_8),
            ColorMode::Indexed16 => Some(&PALETTE_16),
            ColorMode::Indexed256 => Some(palette_256()),
        }
    }
}
