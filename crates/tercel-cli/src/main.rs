//! tercel - display an image as a colored cell mosaic
//!
//! Downsamples an image to the terminal's character grid and paints one
//! background-colored space per cell.

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tercel::{render_image, ColorMode, SourceImage, TargetGrid};

#[derive(Parser)]
#[command(name = "tercel")]
#[command(version)]
#[command(about = "Display an image as a colored cell mosaic", long_about = None)]
struct Cli {
    /// Input image file (PNG, JPEG, GIF, WebP)
    image: PathBuf,

    /// Output width in terminal columns (default: terminal width)
    #[arg(short = 'W', long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Output height in terminal rows (default: terminal height)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Terminal color model to render with
    #[arg(short, long, value_enum, default_value_t = Colors::Truecolor)]
    colors: Colors,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Colors {
    /// 24-bit color, emitted directly
    Truecolor,
    /// 256-color palette (16 ANSI + 6x6x6 cube + grayscale ramp)
    #[value(name = "256")]
    Indexed256,
    /// 16 ANSI colors
    #[value(name = "16")]
    Indexed16,
    /// 8 primary colors
    #[value(name = "8")]
    Indexed8,
}

impl From<Colors> for ColorMode {
    fn from(colors: Colors) -> Self {
        match colors {
            Colors::Truecolor => ColorMode::Truecolor,
            Colors::Indexed256 => ColorMode::Indexed256,
            Colors::Indexed16 => ColorMode::Indexed16,
            Colors::Indexed8 => ColorMode::Indexed8,
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = u8::from(err.use_stderr());
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tercel: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let grid = resolve_grid(cli.width, cli.height)?;

    let img = image::open(&cli.image)
        .map_err(|e| format!("failed to open '{}': {}", cli.image.display(), e))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let source = SourceImage::from_rgba(rgba.as_raw(), width as usize, height as usize)?;

    let frame = render_image(&source, &grid, cli.colors.into())?;
    io::stdout().write_all(frame.as_bytes())?;
    Ok(())
}

/// Explicit --width/--height override the probed terminal size per axis.
fn resolve_grid(
    width: Option<u32>,
    height: Option<u32>,
) -> Result<TargetGrid, Box<dyn std::error::Error>> {
    let (cols, rows) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            let (term_cols, term_rows) = crossterm::terminal::size().map_err(|_| {
                "could not determine terminal size; pass --width and --height explicitly"
            })?;
            (
                width.unwrap_or_else(|| u32::from(term_cols)),
                height.unwrap_or_else(|| u32::from(term_rows)),
            )
        }
    };
    Ok(TargetGrid::new(cols as usize, rows as usize)?)
}
