use egui::Vec2;
use image::RgbaImage;
use image::imageops::{self, FilterType};

use super::view::Rotation;
use crate::grid::{GridParameters, apply_grid};

/// Frame ready to be shown in the preview viewport
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Rotated, gridded and zoomed pixels
    pub pixels: RgbaImage,

    /// Top-left position of the frame inside the viewport
    pub offset: Vec2,
}

impl RenderedFrame {
    pub fn size(&self) -> Vec2 {
        let (width, height) = self.pixels.dimensions();
        Vec2::new(width as f32, height as f32)
    }
}

/// Rotate counter-clockwise by a right angle. The bounding box always grows to
/// fit, so quarter turns swap width and height and nothing is cropped.
pub fn rotate(image: &RgbaImage, rotation: Rotation) -> RgbaImage {
    match rotation {
        Rotation::Deg0 => image.clone(),
        // imageops rotates clockwise
        Rotation::Deg90 => imageops::rotate270(image),
        Rotation::Deg180 => imageops::rotate180(image),
        Rotation::Deg270 => imageops::rotate90(image),
    }
}

/// Scale for display. A zoom of exactly 1.0 passes the image through.
pub fn scale_for_zoom(image: RgbaImage, zoom: f32) -> RgbaImage {
    if zoom == 1.0 {
        return image;
    }

    let (width, height) = image.dimensions();
    let new_width = ((width as f32 * zoom) as u32).max(1);
    let new_height = ((height as f32 * zoom) as u32).max(1);
    imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
}

/// Offset that centers an image inside the viewport, or pins it to the
/// top-left corner on any axis where it does not fit.
pub fn center_offset(image_size: Vec2, viewport: Vec2) -> Vec2 {
    let gap = ((viewport - image_size) / 2.0).floor();
    gap.max(Vec2::ZERO)
}

/// Rotation and grid, without zoom. This is what gets written on save.
pub fn compose_for_save(source: &RgbaImage, rotation: Rotation, params: &GridParameters) -> RgbaImage {
    let rotated = rotate(source, rotation);
    apply_grid(&rotated, params)
}

/// Full preview pipeline: rotate, overlay the grid, zoom, then center.
pub fn render(
    source: &RgbaImage,
    rotation: Rotation,
    params: &GridParameters,
    zoom: f32,
    viewport: Vec2,
) -> RenderedFrame {
    let gridded = compose_for_save(source, rotation, params);
    let pixels = scale_for_zoom(gridded, zoom);

    let (width, height) = pixels.dimensions();
    let offset = center_offset(Vec2::new(width as f32, height as f32), viewport);

    log::debug!(
        "Rendered {}x{} frame (rotation {}, zoom {:.2}) at offset ({}, {})",
        width,
        height,
        rotation.label(),
        zoom,
        offset.x,
        offset.y
    );

    RenderedFrame { pixels, offset }
}
