use egui::Vec2;

/// Scroll origin of the preview viewport.
///
/// Panning only moves the visible window over an already rendered frame; the
/// frame itself is never re-rendered by a pan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanState {
    pub offset: Vec2,
    pub dragging: bool,
}

impl PanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Move the origin opposite to the pointer drag (content follows the
    /// pointer), clamped to the scrollable range.
    pub fn pan_by(&mut self, drag_delta: Vec2, content: Vec2, viewport: Vec2) {
        self.offset = Self::clamp_offset(self.offset - drag_delta, content, viewport);
    }

    /// Re-clamp after the content or viewport size changed
    pub fn fit(&mut self, content: Vec2, viewport: Vec2) {
        self.offset = Self::clamp_offset(self.offset, content, viewport);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clamp_offset(offset: Vec2, content: Vec2, viewport: Vec2) -> Vec2 {
        let max = (content - viewport).max(Vec2::ZERO);
        offset.clamp(Vec2::ZERO, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_stays_inside_scroll_range() {
        let mut pan = PanState::new();
        let content = Vec2::new(1000.0, 800.0);
        let viewport = Vec2::new(600.0, 400.0);

        // Dragging left/up scrolls right/down
        pan.pan_by(Vec2::new(-150.0, -50.0), content, viewport);
        assert_eq!(pan.offset, Vec2::new(150.0, 50.0));

        pan.pan_by(Vec2::new(-1000.0, -1000.0), content, viewport);
        assert_eq!(pan.offset, Vec2::new(400.0, 400.0));

        pan.pan_by(Vec2::new(5000.0, 5000.0), content, viewport);
        assert_eq!(pan.offset, Vec2::ZERO);
    }

    #[test]
    fn small_content_cannot_be_panned() {
        let mut pan = PanState::new();
        pan.pan_by(Vec2::new(-30.0, -30.0), Vec2::new(100.0, 100.0), Vec2::new(600.0, 400.0));
        assert_eq!(pan.offset, Vec2::ZERO);
    }

    #[test]
    fn fit_reclamps_after_zoom_out() {
        let mut pan = PanState::new();
        pan.pan_by(Vec2::new(-500.0, -500.0), Vec2::new(2000.0, 2000.0), Vec2::new(600.0, 400.0));
        assert_eq!(pan.offset, Vec2::new(500.0, 500.0));

        pan.fit(Vec2::new(800.0, 500.0), Vec2::new(600.0, 400.0));
        assert_eq!(pan.offset, Vec2::new(200.0, 100.0));
    }
}
