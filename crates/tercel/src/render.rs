//! Escape-sequence emission for one frame of cell colors.
//!
//! Every cell is painted with an absolute cursor move followed by a
//! background SGR directive and a space, so the emitted stream is
//! self-positioning and the traversal order only matters for byte-level
//! reproducibility. The established order is column-major.

use crate::palette::ColorMode;
use crate::quantize::{quantize, CellColor};
use crate::sample::{sample, SourceImage, TargetGrid};
use crate::{Result, TercelError};

const CSI: &str = "\x1b[";

/// Emit the escape-sequence stream for a grid of resolved cell colors.
///
/// `cells` is row-major, `cols * rows` entries. The stream walks the
/// grid column-major (outer x, inner y), addressing each cell with a
/// 1-indexed `CUP` sequence, and finishes by parking the cursor below
/// the grid and resetting all attributes so the following shell prompt
/// is unaffected.
pub fn render(cells: &[CellColor], grid: &TargetGrid, mode: ColorMode) -> Result<String> {
    if cells.len() != grid.cell_count() {
        return Err(TercelError::BufferSizeMismatch {
            expected: grid.cell_count(),
            actual: cells.len(),
        });
    }

    // Resolve the indexed-color painter once; the per-cell loop only
    // dispatches on the cell variant.
    let paint_indexed: fn(&mut String, u8) = match mode {
        ColorMode::Indexed8 => paint_indexed_8,
        ColorMode::Indexed16 => paint_indexed_16,
        ColorMode::Truecolor | ColorMode::Indexed256 => paint_indexed_256,
    };

    let mut out = String::with_capacity(grid.cell_count() * 16);
    for x in 0..grid.cols() {
        for y in 0..grid.rows() {
            out.push_str(CSI);
            write_number(&mut out, y + 1);
            out.push(';');
            write_number(&mut out, x + 1);
            out.push('H');

            match cells[y * grid.cols() + x] {
                CellColor::Transparent => out.push_str("\x1b[49m"),
                CellColor::Rgb(c) => {
                    out.push_str("\x1b[48;2;");
                    write_number(&mut out, c.r as usize);
                    out.push(';');
                    write_number(&mut out, c.g as usize);
                    out.push(';');
                    write_number(&mut out, c.b as usize);
                    out.push('m');
                }
                CellColor::Indexed(index) => paint_indexed(&mut out, index),
            }
            out.push(' ');
        }
    }

    // Park below the grid and clear residual color state.
    out.push_str(CSI);
    write_number(&mut out, grid.rows() + 1);
    out.push_str(";1H\x1b[0m\n");
    Ok(out)
}

/// Sample, quantize and render an image in one pass.
pub fn render_image(image: &SourceImage, grid: &TargetGrid, mode: ColorMode) -> Result<String> {
    let cells: Vec<CellColor> = sample(image, grid)
        .into_iter()
        .map(|pixel| quantize(pixel, mode))
        .collect();
    render(&cells, grid, mode)
}

fn paint_indexed_8(out: &mut String, index: u8) {
    out.push_str(CSI);
    write_number(out, 40 + index as usize);
    out.push('m');
}

fn paint_indexed_16(out: &mut String, index: u8) {
    // 40-47 for the normal colors, 100-107 for the bright ones
    let code = if index < 8 {
        40 + index as usize
    } else {
        92 + index as usize
    };
    out.push_str(CSI);
    write_number(out, code);
    out.push('m');
}

fn paint_indexed_256(out: &mut String, index: u8) {
    out.push_str("\x1b[48;5;");
    write_number(out, index as usize);
    out.push('m');
}

/// Fast number to string without allocation
#[inline]
fn write_number(out: &mut String, mut n: usize) {
    if n == 0 {
        out.push('0');
        return;
    }

    let mut buf = [0u8; 20];
    let mut i = buf.len();

    while n > 0 {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
    }

    out.push_str(unsafe { std::str::from_utf8_unchecked(&buf[i..]) });
}
