use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::StripFormat;
use crate::foundation::error::{BoothError, BoothResult};
use crate::render::composite::premultiply_in_place;

/// The static decorative frame drawn over the finished strip.
///
/// Loaded once, read-only, and dimension-checked against the strip format
/// at load time rather than silently scaled at draw time.
#[derive(Clone, Debug)]
pub struct OverlayAsset {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl OverlayAsset {
    /// Decode overlay bytes and convert to premultiplied RGBA8.
    pub fn decode(bytes: &[u8], format: StripFormat) -> BoothResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| BoothError::decode(format!("overlay: {e}")))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        if width != format.width() || height != format.height() {
            return Err(BoothError::validation(format!(
                "overlay is {width}x{height}, strip needs {}x{}",
                format.width(),
                format.height()
            )));
        }

        let mut rgba8_premul = img.into_raw();
        premultiply_in_place(&mut rgba8_premul);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Load and decode the overlay from a fixed path.
    pub fn load(path: &Path, format: StripFormat) -> BoothResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read overlay '{}'", path.display()))?;
        Self::decode(&bytes, format)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes in row-major premultiplied RGBA8.
    pub fn rgba8_premul(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/overlay.rs"]
mod tests;
