use crate::foundation::core::CellFormat;
use crate::foundation::error::{BoothError, BoothResult};

/// Identifier of one capture run, bumped on every start/reset so stale
/// asynchronous work can be detected and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(
    /// Raw generation counter.
    pub u64,
);

/// One captured, geometry-corrected frame at exactly cell resolution.
///
/// Immutable once created; the renderer reads it and then it can be
/// discarded.
#[derive(Clone, Debug)]
pub struct RawFrame {
    cell: CellFormat,
    rgba8: Vec<u8>,
}

impl RawFrame {
    /// Construct a frame, checking the buffer matches the cell format.
    pub fn new(cell: CellFormat, rgba8: Vec<u8>) -> BoothResult<Self> {
        if rgba8.len() != cell.byte_len() {
            return Err(BoothError::validation(format!(
                "RawFrame buffer is {} bytes, expected {} for {}x{}",
                rgba8.len(),
                cell.byte_len(),
                cell.width,
                cell.height
            )));
        }
        Ok(Self { cell, rgba8 })
    }

    /// Cell format this frame was captured into.
    pub fn cell(&self) -> CellFormat {
        self.cell
    }

    /// Pixel bytes in row-major straight RGBA8.
    pub fn rgba8(&self) -> &[u8] {
        &self.rgba8
    }
}

/// Ordered, bounded collection of [`RawFrame`]s for one capture run.
///
/// Append-only while a run is in progress; insertion order is temporal
/// capture order and becomes top-to-bottom stacking order in the strip.
#[derive(Clone, Debug)]
pub struct CaptureSession {
    id: SessionId,
    capacity: usize,
    frames: Vec<RawFrame>,
}

impl CaptureSession {
    /// Create an empty session bounded to `capacity` frames.
    pub fn new(id: SessionId, capacity: usize) -> BoothResult<Self> {
        if capacity == 0 {
            return Err(BoothError::validation(
                "CaptureSession capacity must be > 0",
            ));
        }
        Ok(Self {
            id,
            capacity,
            frames: Vec::with_capacity(capacity),
        })
    }

    /// Session generation identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Frames captured so far, in capture order.
    pub fn frames(&self) -> &[RawFrame] {
        &self.frames
    }

    /// Number of frames captured so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Whether the run captured its full complement of frames.
    pub fn is_complete(&self) -> bool {
        self.frames.len() == self.capacity
    }

    /// Append the next captured frame. Rejects appends past the bound.
    pub fn push(&mut self, frame: RawFrame) -> BoothResult<()> {
        if self.frames.len() >= self.capacity {
            return Err(BoothError::validation(format!(
                "CaptureSession already holds {} frames",
                self.capacity
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Drop all captured frames, returning the session to empty.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/session.rs"]
mod tests;
