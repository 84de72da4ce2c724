use crate::session::defaults;

/// Rotation applied to the source image before the grid is drawn.
///
/// Angles are counter-clockwise, matching the usual image-editor convention
/// where "rotate 90°" turns the picture to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn all() -> [Rotation; 4] {
        [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270]
    }

    /// Map any multiple of 90 (including negative and >= 360) onto a rotation
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// True when the rotation swaps width and height
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    pub fn label(self) -> String {
        format!("{}°", self.degrees())
    }
}

/// Direction of a single mouse-wheel notch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Rotation and zoom of the preview.
///
/// Zoom is kept inside [`defaults::ZOOM_MIN`], [`defaults::ZOOM_MAX`] by every
/// mutator, no matter how many steps are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation: Rotation,
    zoom: f32,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            rotation: Rotation::Deg0,
            zoom: defaults::ZOOM_DEFAULT,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(defaults::ZOOM_MIN, defaults::ZOOM_MAX);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * defaults::ZOOM_BUTTON_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / defaults::ZOOM_BUTTON_STEP);
    }

    pub fn zoom_scroll(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::Up => self.set_zoom(self.zoom * defaults::ZOOM_SCROLL_STEP),
            ScrollDirection::Down => self.set_zoom(self.zoom / defaults::ZOOM_SCROLL_STEP),
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = defaults::ZOOM_DEFAULT;
    }

    /// Zoom shown in the toolbar label, truncated like the slider readout
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0) as u32
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
