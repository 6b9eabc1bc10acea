use crate::assets::overlay::OverlayAsset;
use crate::capture::session::{CaptureSession, RawFrame};
use crate::foundation::core::StripFormat;
use crate::foundation::error::{BoothError, BoothResult};
use crate::render::composite::{blend_over_in_place, premultiply_in_place};
use crate::render::grain::{GrainParams, grain_in_place};
use crate::render::tone::{ToneParams, tone_map_in_place};

/// The finalized print strip: stacked, tone-mapped, overlaid, grained.
///
/// Premultiplied RGBA8. Immutable after finalization; only the encoder
/// reads it back out.
#[derive(Clone, Debug)]
pub struct CompositeImage {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
}

impl CompositeImage {
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

/// Incremental strip renderer with an explicit band-completion barrier.
///
/// Bands may be drawn in any submission order (frame decode latency varies
/// per frame); the renderer counts completions and [`StripRenderer::finish`]
/// refuses to run the overlay and grain stages until every band has
/// actually landed. Applying those stages earlier would wash them out with
/// the tone transform, so the ordering is a hard invariant, not a
/// performance choice.
#[derive(Debug)]
pub struct StripRenderer {
    format: StripFormat,
    tone: ToneParams,
    surface: Vec<u8>,
    drawn: Vec<bool>,
    drawn_count: usize,
}

impl StripRenderer {
    /// Allocate the output surface for `format`.
    pub fn new(format: StripFormat, tone: ToneParams) -> BoothResult<Self> {
        tone.validate()?;
        Ok(Self {
            format,
            tone,
            surface: vec![0; format.byte_len()],
            drawn: vec![false; format.frames],
            drawn_count: 0,
        })
    }

    /// Bands drawn so far.
    pub fn bands_drawn(&self) -> usize {
        self.drawn_count
    }

    /// Whether every band has been drawn and the strip can be finished.
    pub fn all_bands_drawn(&self) -> bool {
        self.drawn_count == self.format.frames
    }

    /// Tone-map `frame` and draw it into the vertical band `index`.
    ///
    /// Each band can be drawn exactly once; the frame must match the cell
    /// format.
    pub fn draw_band(&mut self, index: usize, frame: &RawFrame) -> BoothResult<()> {
        if index >= self.format.frames {
            return Err(BoothError::render(format!(
                "band index {index} out of range 0..{}",
                self.format.frames
            )));
        }
        if self.drawn[index] {
            return Err(BoothError::render(format!("band {index} already drawn")));
        }
        if frame.cell() != self.format.cell {
            return Err(BoothError::render(format!(
                "frame cell {}x{} does not match strip cell {}x{}",
                frame.cell().width,
                frame.cell().height,
                self.format.cell.width,
                self.format.cell.height
            )));
        }

        let mut band = frame.rgba8().to_vec();
        tone_map_in_place(&mut band, self.tone);
        premultiply_in_place(&mut band);

        // Cell width == strip width, so a band is one contiguous byte range.
        let len = self.format.cell.byte_len();
        let start = index * len;
        self.surface[start..start + len].copy_from_slice(&band);

        self.drawn[index] = true;
        self.drawn_count += 1;
        Ok(())
    }

    /// Draw the overlay, synthesize grain, and finalize the strip.
    ///
    /// Fails unless exactly all bands have been drawn; a strip is never
    /// finalized with a silently missing band.
    pub fn finish(
        mut self,
        overlay: &OverlayAsset,
        grain: &GrainParams,
    ) -> BoothResult<CompositeImage> {
        if !self.all_bands_drawn() {
            return Err(BoothError::render(format!(
                "cannot finalize strip: {} of {} bands drawn",
                self.drawn_count, self.format.frames
            )));
        }
        if overlay.width() != self.format.width() || overlay.height() != self.format.height() {
            return Err(BoothError::render(format!(
                "overlay is {}x{}, strip is {}x{}",
                overlay.width(),
                overlay.height(),
                self.format.width(),
                self.format.height()
            )));
        }

        blend_over_in_place(&mut self.surface, overlay.rgba8_premul(), 1.0)?;
        grain_in_place(
            &mut self.surface,
            self.format.width(),
            self.format.height(),
            grain,
        )?;

        Ok(CompositeImage {
            width: self.format.width(),
            height: self.format.height(),
            rgba8_premul: self.surface,
        })
    }
}

/// Render a completed session into one strip, in capture order.
#[tracing::instrument(skip(session, overlay, grain))]
pub fn render_strip(
    session: &CaptureSession,
    overlay: &OverlayAsset,
    tone: ToneParams,
    grain: &GrainParams,
) -> BoothResult<CompositeImage> {
    if !session.is_complete() {
        return Err(BoothError::render(format!(
            "session has {} frames, render needs the full strip",
            session.len()
        )));
    }

    let format = StripFormat::new(
        session.frames()[0].cell(),
        session.frames().len(),
    )?;
    let mut renderer = StripRenderer::new(format, tone)?;
    for (index, frame) in session.frames().iter().enumerate() {
        renderer.draw_band(index, frame)?;
    }
    renderer.finish(overlay, grain)
}

#[cfg(test)]
#[path = "../../tests/unit/render/strip.rs"]
mod tests;
