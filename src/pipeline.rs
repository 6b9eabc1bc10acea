use crate::assets::overlay::OverlayAsset;
use crate::capture::sequencer::{Sequencer, SequencerEvent, TickToken};
use crate::capture::source::FrameSource;
use crate::foundation::core::StripFormat;
use crate::foundation::error::{BoothError, BoothResult};
use crate::render::grain::GrainParams;
use crate::render::strip::{CompositeImage, render_strip};
use crate::render::tone::ToneParams;

/// Signals the booth emits towards its UI collaborator.
///
/// The pipeline emits these; it does not itself manage page navigation,
/// button state, or label text. A failed `start` surfaces as
/// [`BoothError::SourceUnavailable`] on the call itself, which is the
/// "source unavailable" signal.
#[derive(Clone, Debug)]
pub enum BoothEvent {
    /// Countdown progress: `remaining` steps until the next capture.
    CountdownTick {
        /// Steps left before the capture fires.
        remaining: u32,
    },
    /// A frame landed in the session.
    FrameCaptured {
        /// Zero-based capture index within the run.
        index: usize,
    },
    /// All frames captured; the render is about to run.
    SequenceComplete,
    /// The finalized print is ready for export.
    RenderComplete(CompositeImage),
}

/// Facade wiring the capture sequencer into the strip renderer.
///
/// Owns the overlay and the look parameters, front-loaded at construction
/// (no IO afterwards). Drive it like the sequencer: `start`, then one
/// `tick` per [`crate::STEP_INTERVAL`]; when the sequence completes the
/// render runs immediately and the tick yields
/// [`BoothEvent::RenderComplete`].
#[derive(Debug)]
pub struct Photobooth {
    sequencer: Sequencer,
    overlay: OverlayAsset,
    tone: ToneParams,
    grain: GrainParams,
}

impl Photobooth {
    /// Create a booth for the fixed print format.
    pub fn new(overlay: OverlayAsset, tone: ToneParams, grain: GrainParams) -> BoothResult<Self> {
        Self::with_format(StripFormat::print(), overlay, tone, grain)
    }

    /// Create a booth for an explicit strip format.
    pub fn with_format(
        format: StripFormat,
        overlay: OverlayAsset,
        tone: ToneParams,
        grain: GrainParams,
    ) -> BoothResult<Self> {
        tone.validate()?;
        grain.validate()?;
        if overlay.width() != format.width() || overlay.height() != format.height() {
            return Err(BoothError::validation(format!(
                "overlay is {}x{}, strip format is {}x{}",
                overlay.width(),
                overlay.height(),
                format.width(),
                format.height()
            )));
        }
        Ok(Self {
            sequencer: Sequencer::new(format)?,
            overlay,
            tone,
            grain,
        })
    }

    /// Strip format this booth prints.
    pub fn format(&self) -> StripFormat {
        self.sequencer.format()
    }

    /// Whether a capture run is in progress.
    pub fn is_active(&self) -> bool {
        self.sequencer.is_active()
    }

    /// Begin a capture run.
    ///
    /// A fresh arm also yields the opening [`BoothEvent::CountdownTick`],
    /// so the UI hears every countdown step without special-casing the
    /// first round. See [`Sequencer::start`] for re-entrancy and
    /// source-liveness behavior.
    pub fn start(
        &mut self,
        source: &dyn FrameSource,
    ) -> BoothResult<(TickToken, Vec<BoothEvent>)> {
        let (token, events) = self.sequencer.start(source)?;
        let events = events
            .into_iter()
            .map(|ev| match ev {
                SequencerEvent::CountdownTick { remaining } => {
                    BoothEvent::CountdownTick { remaining }
                }
                SequencerEvent::FrameCaptured { index } => BoothEvent::FrameCaptured { index },
                SequencerEvent::SequenceComplete => BoothEvent::SequenceComplete,
            })
            .collect();
        Ok((token, events))
    }

    /// Advance by one elapsed interval and translate sequencer progress
    /// into booth events, rendering the strip on completion.
    ///
    /// Any capture or render failure resets the booth so the next `start`
    /// behaves like a first run.
    pub fn tick(
        &mut self,
        token: TickToken,
        source: &mut dyn FrameSource,
    ) -> BoothResult<Vec<BoothEvent>> {
        let mut events = Vec::new();
        for ev in self.sequencer.tick(token, source)? {
            match ev {
                SequencerEvent::CountdownTick { remaining } => {
                    events.push(BoothEvent::CountdownTick { remaining });
                }
                SequencerEvent::FrameCaptured { index } => {
                    events.push(BoothEvent::FrameCaptured { index });
                }
                SequencerEvent::SequenceComplete => {
                    events.push(BoothEvent::SequenceComplete);
                    let session = self.sequencer.take_completed().ok_or_else(|| {
                        BoothError::render("sequence completed without a session")
                    })?;
                    let strip = match render_strip(&session, &self.overlay, self.tone, &self.grain)
                    {
                        Ok(strip) => strip,
                        Err(e) => {
                            self.sequencer.reset();
                            return Err(e);
                        }
                    };
                    tracing::debug!(
                        width = strip.width(),
                        height = strip.height(),
                        "print rendered"
                    );
                    events.push(BoothEvent::RenderComplete(strip));
                }
            }
        }
        Ok(events)
    }

    /// Retake: abandon any in-flight run and return to idle. Idempotent.
    pub fn reset(&mut self) {
        self.sequencer.reset();
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
