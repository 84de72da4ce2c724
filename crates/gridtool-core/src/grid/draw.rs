use image::{Rgba, RgbaImage};

use super::{GridLayout, GridParameters};

/// Draw the grid described by `params` over a copy of `image`.
///
/// The input is never modified, so callers can keep re-applying the grid to
/// the same source pixels without lines accumulating.
pub fn apply_grid(image: &RgbaImage, params: &GridParameters) -> RgbaImage {
    let mut result = image.clone();
    let (width, height) = result.dimensions();
    let layout = GridLayout::compute(width, height, params);

    let [r, g, b] = params.color.0;
    let color = Rgba([r, g, b, 255]);

    for &x in &layout.vertical {
        if let Some((start, end)) = line_band(x, params.thickness, width) {
            for y in 0..height {
                for px in start..end {
                    result.put_pixel(px, y, color);
                }
            }
        }
    }

    for &y in &layout.horizontal {
        if let Some((start, end)) = line_band(y, params.thickness, height) {
            for py in start..end {
                for x in 0..width {
                    result.put_pixel(x, py, color);
                }
            }
        }
    }

    log::debug!(
        "Drew {} grid lines ({}, {}px, {}) on {}x{} image",
        layout.line_count(),
        params.mode_description(),
        params.thickness,
        params.color_hex(),
        width,
        height
    );

    result
}

/// Pixel range covered by a line of `thickness` centered on `position`,
/// clipped to `0..limit`. None when the band falls entirely outside.
fn line_band(position: f64, thickness: u32, limit: u32) -> Option<(u32, u32)> {
    let thickness = thickness.max(1) as i64;
    let start = (position - thickness as f64 / 2.0).round() as i64;
    let end = start + thickness;

    let start = start.max(0);
    let end = end.min(limit as i64);
    if start >= end {
        return None;
    }
    Some((start as u32, end as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const BACKGROUND: Rgba<u8> = Rgba([10, 20, 30, 255]);

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, BACKGROUND)
    }

    fn red_grid(cell_count: u32, thickness: u32, square_cells: bool) -> GridParameters {
        GridParameters {
            cell_count,
            thickness,
            color: Rgb([255, 0, 0]),
            square_cells,
        }
    }

    #[test]
    fn band_is_centered_and_clipped() {
        assert_eq!(line_band(50.0, 1, 100), Some((50, 51)));
        assert_eq!(line_band(50.0, 2, 100), Some((49, 51)));
        assert_eq!(line_band(50.0, 3, 100), Some((49, 52)));
        assert_eq!(line_band(0.0, 2, 100), Some((0, 1)));
        assert_eq!(line_band(100.0, 2, 100), Some((99, 100)));
        assert_eq!(line_band(100.0, 1, 100), None);
        assert_eq!(line_band(450.0, 4, 400), None);
    }

    #[test]
    fn source_image_is_left_untouched() {
        let source = blank(40, 20);
        let gridded = apply_grid(&source, &red_grid(4, 1, false));

        assert!(source.pixels().all(|p| *p == BACKGROUND));
        assert_ne!(source, gridded);
        assert_eq!(source.dimensions(), gridded.dimensions());
    }

    #[test]
    fn rectangular_lines_land_on_cell_boundaries() {
        let gridded = apply_grid(&blank(40, 20), &red_grid(4, 1, false));
        let red = Rgba([255, 0, 0, 255]);

        // Vertical lines every 10px, horizontal every 5px, all full length
        for x in [0u32, 10, 20, 30] {
            for y in 0..20 {
                assert_eq!(*gridded.get_pixel(x, y), red, "vertical line at x={}", x);
            }
        }
        for y in [0u32, 5, 10, 15] {
            for x in 0..40 {
                assert_eq!(*gridded.get_pixel(x, y), red, "horizontal line at y={}", y);
            }
        }

        // Cell interiors keep the source pixels
        assert_eq!(*gridded.get_pixel(4, 2), BACKGROUND);
        assert_eq!(*gridded.get_pixel(35, 17), BACKGROUND);
    }

    #[test]
    fn thickness_widens_lines() {
        let gridded = apply_grid(&blank(40, 40), &red_grid(2, 4, false));
        let red = Rgba([255, 0, 0, 255]);

        // Middle vertical line at x = 20 covers 18..22
        for x in 18..22 {
            assert_eq!(*gridded.get_pixel(x, 7), red);
        }
        assert_eq!(*gridded.get_pixel(17, 7), BACKGROUND);
        assert_eq!(*gridded.get_pixel(22, 7), BACKGROUND);
    }

    #[test]
    fn square_cells_follow_smaller_side() {
        let gridded = apply_grid(&blank(40, 20), &red_grid(2, 1, true));
        let red = Rgba([255, 0, 0, 255]);

        // edge = 10 on both axes
        for x in [0u32, 10, 20, 30] {
            assert_eq!(*gridded.get_pixel(x, 3), red);
        }
        assert_eq!(*gridded.get_pixel(5, 3), BACKGROUND);
        assert_eq!(*gridded.get_pixel(15, 3), BACKGROUND);
    }

    #[test]
    fn grid_replaces_transparency_with_opaque_color() {
        let source = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        let gridded = apply_grid(&source, &red_grid(2, 1, false));
        assert_eq!(*gridded.get_pixel(5, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*gridded.get_pixel(2, 2), Rgba([0, 0, 0, 0]));
    }
}
