// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for display and upload.

use crate::error::Result;
use iced::widget::image;
use iced::Size;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Natural image size in pixels, as an `f32` size for layout math.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// A decoded image together with its original encoded bytes, which are what
/// gets uploaded to the calibration service.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub data: ImageData,
    pub encoded: Vec<u8>,
    pub mime: &'static str,
}

/// MIME type guess from the file extension, used for the upload data URL.
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "image/png",
    }
}

/// Reads and decodes an image from disk.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let encoded = fs::read(path)?;
    let decoded = image_rs::load_from_memory(&encoded)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(path = %path.display(), width, height, "decoded image");

    Ok(LoadedImage {
        data: ImageData::from_rgba(width, height, rgba.into_raw()),
        encoded,
        mime: mime_for(path),
    })
}
