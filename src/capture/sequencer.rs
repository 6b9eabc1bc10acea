use crate::capture::geometry::capture_cell;
use crate::capture::session::{CaptureSession, SessionId};
use crate::capture::source::FrameSource;
use crate::foundation::core::{COUNTDOWN_STEPS, StripFormat};
use crate::foundation::error::{BoothError, BoothResult};

/// Handle for timer callbacks, issued by [`Sequencer::start`].
///
/// A token carries the generation of the run it was armed for. Ticks
/// presenting a token from an earlier generation are ignored, so a timer
/// scheduled before a [`Sequencer::reset`] can never land a capture in a
/// newer session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

/// Progress notifications emitted towards the UI collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    /// A countdown step elapsed; `remaining` steps until the next capture.
    CountdownTick {
        /// Steps left before the capture fires.
        remaining: u32,
    },
    /// A frame was captured and appended to the session.
    FrameCaptured {
        /// Zero-based capture index within the run.
        index: usize,
    },
    /// All frames are captured and the trailing delay elapsed; the
    /// completed session can be taken with [`Sequencer::take_completed`].
    SequenceComplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Countdown { round: usize, remaining: u32 },
    Trailing,
    Complete,
}

/// Tick-driven capture state machine.
///
/// The host event loop owns the timer: it arms the sequencer with
/// [`Sequencer::start`], then calls [`Sequencer::tick`] once per fixed
/// interval ([`crate::STEP_INTERVAL`]) with the token `start` handed out.
/// Each round counts down [`COUNTDOWN_STEPS`] ticks, captures exactly one
/// frame through the geometry transform, and after the final round one
/// trailing tick lets the last frame register before completion is
/// announced.
#[derive(Debug)]
pub struct Sequencer {
    format: StripFormat,
    generation: u64,
    phase: Phase,
    session: CaptureSession,
}

impl Sequencer {
    /// Create an idle sequencer for the given strip format.
    pub fn new(format: StripFormat) -> BoothResult<Self> {
        Ok(Self {
            format,
            generation: 0,
            phase: Phase::Idle,
            session: CaptureSession::new(SessionId(0), format.frames)?,
        })
    }

    /// Strip format captures are produced for.
    pub fn format(&self) -> StripFormat {
        self.format
    }

    /// Whether a run is currently counting down or capturing.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Countdown { .. } | Phase::Trailing)
    }

    /// Frames captured in the current run so far.
    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    /// Begin a capture run.
    ///
    /// Rejects the source with [`BoothError::SourceUnavailable`] if it is
    /// not live; never proceeds with a blank frame. Arming emits the first
    /// round's opening [`SequencerEvent::CountdownTick`], so every round
    /// announces its full countdown (later rounds announce theirs from the
    /// capture tick). Calling `start` while a run is active is ignored and
    /// returns the token of the run already in progress with no events, so
    /// at most one sequence runs at a time.
    pub fn start(
        &mut self,
        source: &dyn FrameSource,
    ) -> BoothResult<(TickToken, Vec<SequencerEvent>)> {
        if self.is_active() {
            tracing::debug!(generation = self.generation, "start ignored: run active");
            return Ok((self.token(), Vec::new()));
        }
        if !source.is_live() {
            return Err(BoothError::source_unavailable(
                "frame source is not producing frames",
            ));
        }

        self.generation += 1;
        self.session = CaptureSession::new(SessionId(self.generation), self.format.frames)?;
        self.phase = Phase::Countdown {
            round: 0,
            remaining: COUNTDOWN_STEPS,
        };
        tracing::debug!(generation = self.generation, "capture run armed");
        Ok((
            self.token(),
            vec![SequencerEvent::CountdownTick {
                remaining: COUNTDOWN_STEPS,
            }],
        ))
    }

    /// Advance the machine by one elapsed interval.
    ///
    /// Stale tokens (armed before the last reset/start) and ticks while
    /// idle are no-ops. A sampling or capture failure aborts the run,
    /// clears the session, and is propagated to the caller.
    pub fn tick(
        &mut self,
        token: TickToken,
        source: &mut dyn FrameSource,
    ) -> BoothResult<Vec<SequencerEvent>> {
        if token.generation != self.generation {
            tracing::debug!(
                token = token.generation,
                current = self.generation,
                "stale tick dropped"
            );
            return Ok(Vec::new());
        }

        match self.phase {
            Phase::Idle | Phase::Complete => Ok(Vec::new()),
            Phase::Countdown { round, remaining } => {
                let remaining = remaining - 1;
                if remaining > 0 {
                    self.phase = Phase::Countdown { round, remaining };
                    return Ok(vec![SequencerEvent::CountdownTick { remaining }]);
                }

                let index = match self.capture_round(source) {
                    Ok(index) => index,
                    Err(e) => {
                        self.abort_run();
                        return Err(e);
                    }
                };

                let mut events = vec![SequencerEvent::FrameCaptured { index }];
                if round + 1 < self.format.frames {
                    self.phase = Phase::Countdown {
                        round: round + 1,
                        remaining: COUNTDOWN_STEPS,
                    };
                    events.push(SequencerEvent::CountdownTick {
                        remaining: COUNTDOWN_STEPS,
                    });
                } else {
                    self.phase = Phase::Trailing;
                }
                Ok(events)
            }
            Phase::Trailing => {
                self.phase = Phase::Complete;
                Ok(vec![SequencerEvent::SequenceComplete])
            }
        }
    }

    /// Abandon any in-flight run and return to idle with an empty session.
    ///
    /// Idempotent; bumps the generation so already-scheduled timers holding
    /// an old token become no-ops.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.session.clear();
        self.phase = Phase::Idle;
    }

    /// Move the completed session out, returning the sequencer to idle.
    ///
    /// `None` unless a [`SequencerEvent::SequenceComplete`] was emitted and
    /// not yet consumed.
    pub fn take_completed(&mut self) -> Option<CaptureSession> {
        if self.phase != Phase::Complete {
            return None;
        }
        self.phase = Phase::Idle;
        let empty = CaptureSession::new(SessionId(self.generation), self.format.frames).ok()?;
        Some(std::mem::replace(&mut self.session, empty))
    }

    fn token(&self) -> TickToken {
        TickToken {
            generation: self.generation,
        }
    }

    fn capture_round(&mut self, source: &mut dyn FrameSource) -> BoothResult<usize> {
        let frame = source.sample()?;
        let raw = capture_cell(&frame, self.format.cell)?;
        self.session.push(raw)?;
        Ok(self.session.len() - 1)
    }

    fn abort_run(&mut self) {
        self.generation += 1;
        self.session.clear();
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/sequencer.rs"]
mod tests;
