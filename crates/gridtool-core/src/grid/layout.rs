use super::GridParameters;

/// Line coordinates of a grid for a given image size.
///
/// Vertical lines are stored as x positions and span the full image height;
/// horizontal lines are stored as y positions and span the full image width.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub width: u32,
    pub height: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

impl GridLayout {
    /// Compute line positions for an image of `width` x `height` pixels.
    ///
    /// In square mode the cell edge comes from the smaller side, so on a
    /// non-square image the last line on the longer axis can land past the
    /// image edge. Those lines are kept; drawing clips them.
    pub fn compute(width: u32, height: u32, params: &GridParameters) -> Self {
        let cells = params.cell_count.max(1);

        if params.square_cells {
            let min_side = width.min(height);
            let cell_edge = min_side as f64 / cells as f64;
            let lines_x = Self::square_line_count(width, min_side, cells);
            let lines_y = Self::square_line_count(height, min_side, cells);

            Self {
                width,
                height,
                cell_width: cell_edge,
                cell_height: cell_edge,
                vertical: Self::positions(lines_x, cell_edge),
                horizontal: Self::positions(lines_y, cell_edge),
            }
        } else {
            let cell_width = width as f64 / cells as f64;
            let cell_height = height as f64 / cells as f64;
            let lines = cells as usize + 1;

            Self {
                width,
                height,
                cell_width,
                cell_height,
                vertical: Self::positions(lines, cell_width),
                horizontal: Self::positions(lines, cell_height),
            }
        }
    }

    /// ceil(side / cell_edge) + 1, with the ratio taken as side * cells / min_side
    /// so that a side equal to the smaller one yields exactly `cells` cells.
    fn square_line_count(side: u32, min_side: u32, cells: u32) -> usize {
        if min_side == 0 {
            return 1;
        }
        let ratio = side as f64 * cells as f64 / min_side as f64;
        ratio.ceil() as usize + 1
    }

    fn positions(count: usize, spacing: f64) -> Vec<f64> {
        (0..count).map(|i| i as f64 * spacing).collect()
    }

    pub fn line_count(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cell_count: u32, square_cells: bool) -> GridParameters {
        GridParameters {
            cell_count,
            square_cells,
            ..GridParameters::default()
        }
    }

    #[test]
    fn square_mode_on_wide_image() {
        let layout = GridLayout::compute(400, 200, &params(4, true));

        assert_eq!(layout.cell_width, 50.0);
        assert_eq!(layout.cell_height, 50.0);
        assert_eq!(layout.vertical.len(), 9);
        assert_eq!(layout.horizontal.len(), 5);
        assert_eq!(layout.vertical.last().copied(), Some(400.0));
        assert_eq!(layout.horizontal.last().copied(), Some(200.0));
    }

    #[test]
    fn square_mode_last_line_may_overshoot() {
        // edge = 300 / 4 = 75, ceil(400 / 75) = 6 cells -> 7 lines, last at 450
        let layout = GridLayout::compute(400, 300, &params(4, true));

        assert_eq!(layout.cell_width, 75.0);
        assert_eq!(layout.vertical.len(), 7);
        assert_eq!(layout.vertical.last().copied(), Some(450.0));
        assert_eq!(layout.horizontal.len(), 5);
    }

    #[test]
    fn square_mode_spacing_and_count_follow_min_side() {
        for &(w, h) in &[(640u32, 480u32), (123, 457), (1000, 1000), (37, 999)] {
            for cells in 2..=50 {
                let layout = GridLayout::compute(w, h, &params(cells, true));
                let edge = w.min(h) as f64 / cells as f64;

                assert!((layout.cell_width - edge).abs() < 1e-9);
                let expected_x = (w as f64 / edge - 1e-9).ceil() as usize + 1;
                let expected_y = (h as f64 / edge - 1e-9).ceil() as usize + 1;
                assert_eq!(layout.vertical.len(), expected_x, "{}x{} cells={}", w, h, cells);
                assert_eq!(layout.horizontal.len(), expected_y, "{}x{} cells={}", w, h, cells);

                for pair in layout.vertical.windows(2) {
                    assert!((pair[1] - pair[0] - edge).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn square_image_gets_cell_count_plus_one_lines() {
        let layout = GridLayout::compute(300, 300, &params(7, true));
        assert_eq!(layout.vertical.len(), 8);
        assert_eq!(layout.horizontal.len(), 8);
    }

    #[test]
    fn rectangular_mode_divides_each_axis_evenly() {
        for cells in 2..=50 {
            let layout = GridLayout::compute(400, 200, &params(cells, false));

            assert_eq!(layout.vertical.len(), cells as usize + 1);
            assert_eq!(layout.horizontal.len(), cells as usize + 1);
            assert_eq!(layout.vertical[0], 0.0);
            assert_eq!(layout.horizontal[0], 0.0);
            assert!((layout.vertical[cells as usize] - 400.0).abs() < 1e-9);
            assert!((layout.horizontal[cells as usize] - 200.0).abs() < 1e-9);

            let step_x = 400.0 / cells as f64;
            for pair in layout.vertical.windows(2) {
                assert!((pair[1] - pair[0] - step_x).abs() < 1e-9);
            }
        }
    }
}
