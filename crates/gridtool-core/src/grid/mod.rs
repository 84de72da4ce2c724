//! Grid overlay generation.
//!
//! The grid is described by [`GridParameters`]; [`GridLayout`] turns those
//! parameters and an image size into line coordinates, and [`apply_grid`]
//! rasterizes the lines onto a copy of the image.

pub mod draw;
pub mod layout;

pub use draw::apply_grid;
pub use layout::GridLayout;

use image::Rgb;

use crate::session::defaults;

/// User-adjustable grid settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParameters {
    /// Number of subdivisions along the relevant axis (or both axes)
    pub cell_count: u32,

    /// Line thickness in pixels
    pub thickness: u32,

    /// Line color
    pub color: Rgb<u8>,

    /// true = square cells derived from the smaller image side,
    /// false = cells stretched to fill each axis exactly
    pub square_cells: bool,
}

impl GridParameters {
    pub fn new() -> Self {
        Self {
            cell_count: defaults::CELL_COUNT,
            thickness: defaults::THICKNESS,
            color: Rgb(defaults::GRID_COLOR),
            square_cells: defaults::SQUARE_CELLS,
        }
    }

    /// Set the cell count, clamped to the slider range
    pub fn set_cell_count(&mut self, cell_count: u32) {
        self.cell_count = cell_count.clamp(defaults::CELL_COUNT_MIN, defaults::CELL_COUNT_MAX);
    }

    /// Set the line thickness, clamped to the slider range
    pub fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.clamp(defaults::THICKNESS_MIN, defaults::THICKNESS_MAX);
    }

    pub fn reset_color(&mut self) {
        self.color = Rgb(defaults::GRID_COLOR);
    }

    /// Color as a `#rrggbb` string for status messages
    pub fn color_hex(&self) -> String {
        let [r, g, b] = self.color.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn mode_description(&self) -> &'static str {
        if self.square_cells {
            "square cells"
        } else {
            "rectangular cells"
        }
    }
}

impl Default for GridParameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_settings() {
        let params = GridParameters::default();
        assert_eq!(params.cell_count, 10);
        assert_eq!(params.thickness, 2);
        assert_eq!(params.color, Rgb([0x4C, 0xAF, 0x50]));
        assert!(params.square_cells);
    }

    #[test]
    fn setters_clamp_to_slider_ranges() {
        let mut params = GridParameters::default();

        params.set_cell_count(0);
        assert_eq!(params.cell_count, 2);
        params.set_cell_count(500);
        assert_eq!(params.cell_count, 50);

        params.set_thickness(0);
        assert_eq!(params.thickness, 1);
        params.set_thickness(11);
        assert_eq!(params.thickness, 10);
    }

    #[test]
    fn color_hex_formats_lowercase() {
        let mut params = GridParameters::default();
        assert_eq!(params.color_hex(), "#4caf50");

        params.color = Rgb([255, 0, 16]);
        assert_eq!(params.color_hex(), "#ff0010");

        params.reset_color();
        assert_eq!(params.color_hex(), "#4caf50");
    }
}
