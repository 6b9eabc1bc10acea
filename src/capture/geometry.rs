use image::{RgbaImage, imageops};
use kurbo::Rect;

use crate::capture::session::RawFrame;
use crate::capture::source::SourceFrame;
use crate::foundation::core::{CellFormat, SourceDims};
use crate::foundation::error::{BoothError, BoothResult};

/// Source-space rectangle that fills the cell without letterboxing.
///
/// When the source is relatively wider than the cell, the crop keeps the
/// full source height and trims the width symmetrically; otherwise it keeps
/// the full width and trims the height symmetrically.
pub fn crop_rect(source: SourceDims, cell: CellFormat) -> Rect {
    let sw_full = f64::from(source.width);
    let sh_full = f64::from(source.height);

    let (sw, sh) = if source.aspect() > cell.aspect() {
        (sh_full * cell.aspect(), sh_full)
    } else {
        (sw_full, sw_full / cell.aspect())
    };

    let sx = (sw_full - sw) / 2.0;
    let sy = (sh_full - sh) / 2.0;
    Rect::new(sx, sy, sx + sw, sy + sh)
}

/// Produce one [`RawFrame`] from a sampled source frame: centered crop,
/// resample into the cell, and exactly one horizontal mirror so the result
/// matches the user's mirror self-view.
pub fn capture_cell(frame: &SourceFrame, cell: CellFormat) -> BoothResult<RawFrame> {
    let dims = frame.dims();
    let img = RgbaImage::from_raw(frame.width, frame.height, frame.rgba8.clone())
        .ok_or_else(|| BoothError::decode("source frame buffer does not match dimensions"))?;

    let (sx, sy, sw, sh) = pixel_crop(dims, cell);
    let cropped = imageops::crop_imm(&img, sx, sy, sw, sh).to_image();
    let resized = imageops::resize(&cropped, cell.width, cell.height, imageops::FilterType::Triangle);
    let mirrored = imageops::flip_horizontal(&resized);

    RawFrame::new(cell, mirrored.into_raw())
}

/// Integer crop rectangle clamped inside the source bounds.
fn pixel_crop(source: SourceDims, cell: CellFormat) -> (u32, u32, u32, u32) {
    let r = crop_rect(source, cell);
    let sw = (r.width().round() as u32).clamp(1, source.width);
    let sh = (r.height().round() as u32).clamp(1, source.height);
    let sx = (r.x0.round().max(0.0) as u32).min(source.width - sw);
    let sy = (r.y0.round().max(0.0) as u32).min(source.height - sh);
    (sx, sy, sw, sh)
}

#[cfg(test)]
#[path = "../../tests/unit/capture/geometry.rs"]
mod tests;
