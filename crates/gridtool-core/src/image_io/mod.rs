//! Reading source images and writing gridded results.
//!
//! Formats are chosen purely by file extension. Open accepts PNG, JPEG and
//! BMP; save writes PNG or JPEG and falls back to PNG when the chosen path
//! has no extension.

pub mod error;

pub use error::{ImageIoError, Result};

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageOutputFormat, RgbaImage};

pub const OPEN_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];
pub const SAVE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
pub const DEFAULT_SAVE_EXTENSION: &str = "png";
pub const JPEG_QUALITY: u8 = 75;

/// Image loaded from disk, kept untouched for the whole editing session
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, pixels: RgbaImage) -> Self {
        Self {
            path: path.into(),
            pixels,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// File name for status messages, falling back to the full path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Format used to decode a file, by extension
pub fn open_format(path: &Path) -> Result<ImageFormat> {
    match extension_of(path).as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        Some("bmp") => Ok(ImageFormat::Bmp),
        other => Err(ImageIoError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Output path with the default extension appended when none was given.
/// A trailing dot (`out.`) counts as no extension.
pub fn resolve_save_path(path: &Path) -> PathBuf {
    if path.extension().is_none_or(|e| e.is_empty()) {
        path.with_extension(DEFAULT_SAVE_EXTENSION)
    } else {
        path.to_path_buf()
    }
}

/// Format used to encode a file, by extension
pub fn save_format(path: &Path) -> Result<ImageFormat> {
    match extension_of(path).as_deref() {
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        other => Err(ImageIoError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Load an image and convert it to RGBA.
///
/// Either the whole image is returned or an error; callers never see a
/// partially decoded image.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let format = open_format(path)?;

    let bytes = std::fs::read(path).map_err(|source| ImageIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|source| {
        ImageIoError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let pixels = decoded.to_rgba8();
    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        pixels.width(),
        pixels.height(),
        format
    );

    Ok(SourceImage::new(path, pixels))
}

/// Encode `image` for the given format. JPEG output drops the alpha channel.
pub fn encode_image(image: &RgbaImage, format: ImageFormat, path: &Path) -> Result<Vec<u8>> {
    let (dynamic, output_format) = match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            (DynamicImage::ImageRgb8(rgb), ImageOutputFormat::Jpeg(JPEG_QUALITY))
        }
        _ => (DynamicImage::ImageRgba8(image.clone()), ImageOutputFormat::Png),
    };

    let mut bytes = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut bytes, output_format)
        .map_err(|source| ImageIoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(bytes.into_inner())
}

/// Save `image` and return the path actually written
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let path = resolve_save_path(path);
    let format = save_format(&path)?;
    let bytes = encode_image(image, format, &path)?;

    std::fs::write(&path, bytes).map_err(|source| ImageIoError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!(
        "Saved {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        format
    );

    Ok(path)
}
