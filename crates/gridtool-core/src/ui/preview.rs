use egui::{Color32, Pos2, Rect, Sense, TextureHandle, TextureOptions, Vec2};
use image::imageops;

use crate::GridToolApp;
use crate::display::{self, PanState, RenderedFrame, ScrollDirection};
use crate::session::{Command, defaults};

/// One texture covering part of the rendered frame
pub struct PreviewTile {
    pub texture: TextureHandle,

    /// Placement inside the frame, in frame pixels
    pub rect: Rect,
}

/// GPU copy of the last rendered frame plus viewport bookkeeping.
///
/// Zoomed frames can be larger than the backend allows for a single texture,
/// so the frame is uploaded as a grid of tiles no wider or taller than
/// `max_texture_side`.
pub struct PreviewState {
    pub tiles: Vec<PreviewTile>,
    pub frame_size: Vec2,
    pub frame_offset: Vec2,
    pub viewport: Vec2,
    pub pan: PanState,
    needs_render: bool,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            frame_size: Vec2::ZERO,
            frame_offset: Vec2::ZERO,
            viewport: Vec2::from(defaults::FALLBACK_VIEWPORT),
            pan: PanState::new(),
            needs_render: false,
        }
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.frame_size = Vec2::ZERO;
        self.frame_offset = Vec2::ZERO;
        self.pan.reset();
        self.needs_render = false;
    }

    /// Scrollable extent: the frame plus its centering margin on both sides
    pub fn content_size(&self) -> Vec2 {
        self.frame_size + self.frame_offset * 2.0
    }

    pub fn has_frame(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Upload a freshly rendered frame, split into tiles the backend accepts
    pub fn upload(&mut self, ctx: &egui::Context, frame: RenderedFrame) {
        let max_side = ctx.input(|i| i.max_texture_side).max(1) as u32;
        let (width, height) = frame.pixels.dimensions();

        self.tiles.clear();
        for (y, tile_height) in tile_spans(height, max_side) {
            for (x, tile_width) in tile_spans(width, max_side) {
                let pixels = imageops::crop_imm(&frame.pixels, x, y, tile_width, tile_height).to_image();
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [tile_width as usize, tile_height as usize],
                    pixels.as_raw(),
                );
                let texture = ctx.load_texture(format!("grid_preview_{}_{}", x, y), color_image, TextureOptions::LINEAR);
                let rect = Rect::from_min_size(
                    Pos2::new(x as f32, y as f32),
                    Vec2::new(tile_width as f32, tile_height as f32),
                );
                self.tiles.push(PreviewTile { texture, rect });
            }
        }

        if self.tiles.len() > 1 {
            log::debug!("Preview {}x{} uploaded as {} tiles (max side {})", width, height, self.tiles.len(), max_side);
        }

        self.frame_size = frame.size();
        self.frame_offset = frame.offset;
        self.pan.fit(self.content_size(), self.viewport);
        self.needs_render = false;
    }

    /// Keep centering in sync when only the viewport changed
    fn resize_viewport(&mut self, viewport: Vec2) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.frame_offset = display::center_offset(self.frame_size, viewport);
            self.pan.fit(self.content_size(), viewport);
        }
    }
}

/// Split `length` pixels into `(start, len)` runs of at most `max_side`
fn tile_spans(length: u32, max_side: u32) -> Vec<(u32, u32)> {
    let max_side = max_side.max(1);
    (0..length)
        .step_by(max_side as usize)
        .map(|start| (start, max_side.min(length - start)))
        .collect()
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Preview canvas: draws the rendered frame, pans on drag, zooms on scroll
pub fn show_preview(ui: &mut egui::Ui, app: &mut GridToolApp) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("PREVIEW").color(Color32::from_rgb(0x55, 0x55, 0x55)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new("Drag to pan, Scroll to zoom").weak());
        });
    });
    ui.separator();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_gray(0xF5));

    app.preview.resize_viewport(rect.size());

    if !app.session.has_image() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Open an image to begin",
            egui::FontId::proportional(14.0),
            Color32::from_gray(0xCC),
        );
        return;
    }

    // Mouse wheel zoom, one notch per frame with scroll input
    if response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll > 0.0 {
            app.dispatch(Command::ZoomScroll(ScrollDirection::Up));
        } else if scroll < 0.0 {
            app.dispatch(Command::ZoomScroll(ScrollDirection::Down));
        }
    }

    if app.preview.needs_render() {
        if let Some(frame) = app.session.render(app.preview.viewport) {
            app.preview.upload(ui.ctx(), frame);
        }
    }

    // Drag pans the visible window, the frame is not re-rendered
    if response.drag_started() {
        app.preview.pan.start_drag();
    }
    if response.dragged() && app.preview.pan.dragging {
        let content = app.preview.content_size();
        let viewport = app.preview.viewport;
        app.preview.pan.pan_by(response.drag_delta(), content, viewport);
    }
    if response.drag_stopped() {
        app.preview.pan.stop_drag();
    }

    let origin = rect.min + app.preview.frame_offset - app.preview.pan.offset;
    let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    for tile in &app.preview.tiles {
        let tile_rect = tile.rect.translate(origin.to_vec2());
        if tile_rect.intersects(rect) {
            painter.image(tile.texture.id(), tile_rect, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_includes_centering_margin() {
        let mut preview = PreviewState::new();
        preview.frame_size = Vec2::new(200.0, 100.0);
        preview.frame_offset = Vec2::new(200.0, 150.0);
        assert_eq!(preview.content_size(), Vec2::new(600.0, 400.0));
    }

    #[test]
    fn viewport_resize_recenters() {
        let mut preview = PreviewState::new();
        preview.frame_size = Vec2::new(200.0, 100.0);

        preview.resize_viewport(Vec2::new(400.0, 300.0));
        assert_eq!(preview.frame_offset, Vec2::new(100.0, 100.0));

        preview.resize_viewport(Vec2::new(100.0, 300.0));
        assert_eq!(preview.frame_offset, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn clear_drops_pending_render() {
        let mut preview = PreviewState::new();
        preview.request_render();
        assert!(preview.needs_render());
        preview.clear();
        assert!(!preview.needs_render());
        assert!(!preview.has_frame());
    }

    #[test]
    fn spans_cover_length_without_overlap() {
        assert_eq!(tile_spans(5000, 2048), vec![(0, 2048), (2048, 2048), (4096, 904)]);
        assert_eq!(tile_spans(2048, 2048), vec![(0, 2048)]);
        assert_eq!(tile_spans(10, 2048), vec![(0, 10)]);
        assert!(tile_spans(0, 2048).is_empty());
    }

    #[test]
    fn large_zoomed_frame_uploads_in_tiles() {
        let ctx = egui::Context::default();
        let max_side = ctx.input(|i| i.max_texture_side) as u32;

        let source = image::RgbaImage::from_pixel(500, 420, image::Rgba([90, 90, 90, 255]));
        let frame = display::render(
            &source,
            display::Rotation::Deg0,
            &crate::grid::GridParameters::default(),
            defaults::ZOOM_MAX,
            Vec2::new(600.0, 400.0),
        );
        assert_eq!(frame.pixels.dimensions(), (2500, 2100));

        let mut preview = PreviewState::new();
        preview.request_render();
        preview.upload(&ctx, frame);

        assert!(!preview.needs_render());
        assert_eq!(preview.frame_size, Vec2::new(2500.0, 2100.0));
        assert!(max_side < 2500);
        assert!(preview.tiles.len() > 1);
        for tile in &preview.tiles {
            let [w, h] = tile.texture.size();
            assert!(w as u32 <= max_side && h as u32 <= max_side);
            assert_eq!(tile.rect.size(), Vec2::new(w as f32, h as f32));
        }

        let covered: f32 = preview.tiles.iter().map(|t| t.rect.area()).sum();
        assert_eq!(covered, 2500.0 * 2100.0);
    }
}
