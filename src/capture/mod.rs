pub mod geometry;
pub mod sequencer;
pub mod session;
pub mod source;
