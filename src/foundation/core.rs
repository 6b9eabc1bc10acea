use std::time::Duration;

use crate::foundation::error::{BoothError, BoothResult};

pub use kurbo::{Point, Rect};

/// Number of frames captured per run. Fixed by the print format.
pub const FRAME_COUNT: usize = 4;

/// Width of one strip cell (and of the whole strip) in pixels.
pub const CELL_WIDTH: u32 = 383;

/// Height of one strip cell in pixels (strip height / [`FRAME_COUNT`]).
pub const CELL_HEIGHT: u32 = 512;

/// Discrete countdown steps before each capture.
pub const COUNTDOWN_STEPS: u32 = 3;

/// Real-time duration of one sequencer tick. The pipeline itself counts
/// abstract ticks; hosts map ticks to wall-clock time with this interval.
pub const STEP_INTERVAL: Duration = Duration::from_secs(1);

/// Current pixel dimensions reported by a live frame source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceDims {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SourceDims {
    /// Construct dimensions, rejecting empty feeds.
    pub fn new(width: u32, height: u32) -> BoothResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoothError::validation("SourceDims must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Width / height aspect ratio.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Fixed output cell dimensions one captured frame is resampled into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellFormat {
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
}

impl CellFormat {
    /// Construct a cell format, rejecting empty cells.
    pub fn new(width: u32, height: u32) -> BoothResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoothError::validation("CellFormat must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Width / height aspect ratio.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Bytes of one RGBA8 cell.
    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Output strip format: `frames` cells of `cell` stacked vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StripFormat {
    /// Per-frame cell dimensions.
    pub cell: CellFormat,
    /// Number of stacked cells.
    pub frames: usize,
}

impl StripFormat {
    /// Construct a strip format with at least one frame.
    pub fn new(cell: CellFormat, frames: usize) -> BoothResult<Self> {
        if frames == 0 {
            return Err(BoothError::validation("StripFormat needs at least 1 frame"));
        }
        let total = u64::from(cell.height) * frames as u64;
        if total > u64::from(u32::MAX) {
            return Err(BoothError::validation("StripFormat height overflows u32"));
        }
        Ok(Self { cell, frames })
    }

    /// The fixed 383x2048 four-frame print strip.
    pub fn print() -> Self {
        Self {
            cell: CellFormat {
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            },
            frames: FRAME_COUNT,
        }
    }

    /// Total strip width in pixels.
    pub fn width(self) -> u32 {
        self.cell.width
    }

    /// Total strip height in pixels.
    pub fn height(self) -> u32 {
        self.cell.height * self.frames as u32
    }

    /// Bytes of the whole RGBA8 strip surface.
    pub fn byte_len(self) -> usize {
        self.cell.byte_len() * self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
