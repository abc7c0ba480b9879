use pretty_assertions::assert_eq;
use tercel::*;

/// The 2x2 probe image: red, green / blue, white.
fn probe_image() -> SourceImage {
    let rgba = [
        255u8, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        255, 255, 255, 255, // white
    ];
    SourceImage::from_rgba(&rgba, 2, 2).unwrap()
}

#[test]
fn test_truecolor_2x2_end_to_end() {
    let grid = TargetGrid::new(2, 2).unwrap();
    let out = render_image(&probe_image(), &grid, ColorMode::Truecolor).unwrap();

    // Column-major: (x=0,y=0) red, (x=0,y=1) blue, (x=1,y=0) green,
    // (x=1,y=1) white, then the trailer.
    let expected = concat!(
        "\x1b[1;1H\x1b[48;2;255;0;0m ",
        "\x1b[2;1H\x1b[48;2;0;0;255m ",
        "\x1b[1;2H\x1b[48;2;0;255;0m ",
        "\x1b[2;2H\x1b[48;2;255;255;255m ",
        "\x1b[3;1H\x1b[0m\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_8color_2x2_end_to_end() {
    // The primaries are exact members of the 8-color palette, so each
    // cell maps at distance zero: red=1, green=2, blue=4, white=7.
    let grid = TargetGrid::new(2, 2).unwrap();
    let out = render_image(&probe_image(), &grid, ColorMode::Indexed8).unwrap();

    let expected = concat!(
        "\x1b[1;1H\x1b[41m ",
        "\x1b[2;1H\x1b[44m ",
        "\x1b[1;2H\x1b[42m ",
        "\x1b[2;2H\x1b[47m ",
        "\x1b[3;1H\x1b[0m\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_256color_grayscale_pixel() {
    // 128,128,128 is exactly gray ramp entry 244 (232 + 12, 8 + 10*12 = 128).
    let image = SourceImage::from_rgb(&[128, 128, 128], 1, 1).unwrap();
    let grid = TargetGrid::new(1, 1).unwrap();
    let out = render_image(&image, &grid, ColorMode::Indexed256).unwrap();
    assert_eq!(out, "\x1b[1;1H\x1b[48;5;244m \x1b[2;1H\x1b[0m\n");
}

#[test]
fn test_transparent_pixels_leave_background() {
    let rgba = [
        0u8, 0, 0, 0, // fully transparent
        200, 10, 10, 249, // just below the opacity threshold
        10, 200, 10, 250, // exactly at the threshold: opaque
        10, 10, 200, 255, // opaque
    ];
    let image = SourceImage::from_rgba(&rgba, 2, 2).unwrap();
    let grid = TargetGrid::new(2, 2).unwrap();
    let out = render_image(&image, &grid, ColorMode::Truecolor).unwrap();

    let expected = concat!(
        "\x1b[1;1H\x1b[49m ",
        "\x1b[2;1H\x1b[48;2;10;200;10m ",
        "\x1b[1;2H\x1b[49m ",
        "\x1b[2;2H\x1b[48;2;10;10;200m ",
        "\x1b[3;1H\x1b[0m\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_downsampled_render_stays_deterministic() {
    let mut rgb = Vec::new();
    for y in 0..30usize {
        for x in 0..40usize {
            rgb.extend_from_slice(&[(x * 6) as u8, (y * 8) as u8, 64]);
        }
    }
    let image = SourceImage::from_rgb(&rgb, 40, 30).unwrap();
    let grid = TargetGrid::new(8, 5).unwrap();

    let first = render_image(&image, &grid, ColorMode::Indexed256).unwrap();
    let second = render_image(&image, &grid, ColorMode::Indexed256).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_upsampled_render_repeats_single_pixel() {
    let image = SourceImage::from_rgb(&[1, 2, 3], 1, 1).unwrap();
    let grid = TargetGrid::new(4, 3).unwrap();
    let out = render_image(&image, &grid, ColorMode::Truecolor).unwrap();
    assert_eq!(out.matches("\x1b[48;2;1;2;3m ").count(), 12);
    assert!(out.ends_with("\x1b[4;1H\x1b[0m\n"));
}
