//! boothstrip is a deterministic photobooth capture-and-composite pipeline.
//!
//! It drives a fixed-length countdown-then-capture loop against a live
//! frame source, stacks the captured frames into a single vertical print
//! strip with a filmic tone transform, a decorative overlay, and synthetic
//! film grain, and exports the result as PNG bytes.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: [`Sequencer`] runs N timed capture rounds, each a
//!    3-step countdown followed by exactly one capture through the
//!    geometry transform (`SourceFrame -> RawFrame`).
//! 2. **Render**: [`StripRenderer`] tone-maps and stacks the N frames,
//!    then (and only then) draws the overlay and synthesizes grain.
//! 3. **Export**: [`encode_png`] turns the finalized [`CompositeImage`]
//!    into a PNG byte stream.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: no wall-clock or OS entropy inside the
//!   pipeline; time is abstract ticks, grain noise is seeded.
//! - **Single-threaded, cooperative**: the host event loop owns the timer
//!   and drives the sequencer tick by tick; stale timers are invalidated
//!   by generation-checked [`TickToken`]s.
//! - **Premultiplied RGBA8** on the compositing surface end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod capture;
mod config;
mod encode;
mod foundation;
mod pipeline;
mod render;

pub use assets::overlay::OverlayAsset;
pub use capture::geometry::{capture_cell, crop_rect};
pub use capture::sequencer::{Sequencer, SequencerEvent, TickToken};
pub use capture::session::{CaptureSession, RawFrame, SessionId};
pub use capture::source::{FrameSource, SourceFrame, StillSource};
pub use config::{BoothConfig, read_config_json};
pub use encode::png::{EXPORT_FILE_NAME, encode_png, ensure_parent_dir, write_png};
pub use foundation::core::{
    CELL_HEIGHT, CELL_WIDTH, COUNTDOWN_STEPS, CellFormat, FRAME_COUNT, Point, Rect, STEP_INTERVAL,
    SourceDims, StripFormat,
};
pub use foundation::error::{BoothError, BoothResult};
pub use pipeline::{BoothEvent, Photobooth};
pub use render::composite::{PremulPx, blend_over_in_place, source_over};
pub use render::grain::{GrainParams, grain_in_place};
pub use render::strip::{CompositeImage, StripRenderer, render_strip};
pub use render::tone::{ToneParams, tone_map_in_place};
