//! The per-frame update/draw capability shared by every moving object.

use rand::RngCore;

use crate::display::Canvas;
use crate::sound::SoundSink;

/// Everything an object may need while advancing one frame.
pub struct Frame<'a> {
    /// Current round number (≥ 1); alien speed scales with it.
    pub round: u32,
    pub rng: &'a mut dyn RngCore,
    pub sounds: &'a mut dyn SoundSink,
}

impl<'a> Frame<'a> {
    pub fn new(round: u32, rng: &'a mut dyn RngCore, sounds: &'a mut dyn SoundSink) -> Self {
        Self { round, rng, sounds }
    }
}

/// Advance state once per frame, then draw it.
///
/// `advance` does all mutation; `render` only reads, so a frame is fully
/// simulated before anything is drawn.
pub trait Tickable {
    fn advance(&mut self, frame: &mut Frame<'_>);
    fn render(&self, canvas: &mut dyn Canvas);
}
