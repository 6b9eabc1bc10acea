use std::path::Path;

use anyhow::Context;

use crate::foundation::core::SourceDims;
use crate::foundation::error::{BoothError, BoothResult};

/// One full-resolution frame sampled from a live source.
///
/// Straight (non-premultiplied) RGBA8, row-major, tightly packed. Camera
/// feeds are opaque in practice but the alpha channel is carried through
/// untouched.
#[derive(Clone, Debug)]
pub struct SourceFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Vec<u8>,
}

impl SourceFrame {
    /// Construct a frame, checking the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> BoothResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoothError::validation("SourceFrame must be non-empty"));
        }
        let expected = width as usize * height as usize * 4;
        if rgba8.len() != expected {
            return Err(BoothError::validation(format!(
                "SourceFrame buffer is {} bytes, expected {expected} for {width}x{height}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Current dimensions of this frame.
    pub fn dims(&self) -> SourceDims {
        SourceDims {
            width: self.width,
            height: self.height,
        }
    }
}

/// Abstraction over a live camera feed.
///
/// The pipeline only reads from a source: it never stops or reconfigures
/// the underlying device. Acquisition ("request access") belongs to the
/// implementation; a source that lost its device reports `is_live() ==
/// false` and fails `sample()` with [`BoothError::SourceUnavailable`].
pub trait FrameSource {
    /// Current feed dimensions. May change between samples.
    fn dimensions(&self) -> SourceDims;

    /// Whether the feed is actively producing frames.
    fn is_live(&self) -> bool;

    /// Synchronously grab the current visual content.
    fn sample(&mut self) -> BoothResult<SourceFrame>;
}

/// A still image standing in for a camera feed.
///
/// Every sample returns the same frame. Used by the CLI demo driver and by
/// tests; a real host supplies its own [`FrameSource`] over the device.
#[derive(Clone, Debug)]
pub struct StillSource {
    frame: SourceFrame,
    live: bool,
}

impl StillSource {
    /// Wrap a frame as an always-live source.
    pub fn new(frame: SourceFrame) -> Self {
        Self { frame, live: true }
    }

    /// Decode an image file into a still source.
    pub fn from_path(path: &Path) -> BoothResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read source '{}'", path.display()))?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| BoothError::decode(format!("source '{}': {e}", path.display())))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self::new(SourceFrame::new(width, height, img.into_raw())?))
    }

    /// Simulate the feed going away (for tests and demos).
    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }
}

impl FrameSource for StillSource {
    fn dimensions(&self) -> SourceDims {
        self.frame.dims()
    }

    fn is_live(&self) -> bool {
        self.live
    }

    fn sample(&mut self) -> BoothResult<SourceFrame> {
        if !self.live {
            return Err(BoothError::source_unavailable("still source is not live"));
        }
        Ok(self.frame.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/source.rs"]
mod tests;
