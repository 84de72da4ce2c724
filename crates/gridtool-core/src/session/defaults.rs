// Default grid settings and the ranges enforced by the settings sliders

pub const CELL_COUNT: u32 = 10;
pub const CELL_COUNT_MIN: u32 = 2;
pub const CELL_COUNT_MAX: u32 = 50;

pub const THICKNESS: u32 = 2;
pub const THICKNESS_MIN: u32 = 1;
pub const THICKNESS_MAX: u32 = 10;

/// #4CAF50
pub const GRID_COLOR: [u8; 3] = [0x4C, 0xAF, 0x50];
pub const SQUARE_CELLS: bool = true;

// Zoom bounds and step factors
pub const ZOOM_DEFAULT: f32 = 1.0;
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 5.0;
pub const ZOOM_BUTTON_STEP: f32 = 1.25;
pub const ZOOM_SCROLL_STEP: f32 = 1.1;

// Used before the preview area has been laid out
pub const FALLBACK_VIEWPORT: [f32; 2] = [600.0, 400.0];
