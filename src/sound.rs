//! Sound cues.
//!
//! Game objects never touch an audio device; they name a [`Cue`] and hand it
//! to whatever [`SoundSink`] the frame loop installed.  Playback is
//! fire-and-forget.

use std::io::Write;

use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    PlayerFire,
    EnemyFire,
    EnemyHit,
    PlayerHit,
    Breach,
    NextRound,
}

impl Cue {
    /// Cues loud enough to deserve the terminal bell.
    pub fn is_alert(self) -> bool {
        matches!(self, Cue::PlayerHit | Cue::Breach | Cue::NextRound)
    }
}

pub trait SoundSink {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues in order — handy when asserting on what was played.
impl SoundSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Rings the terminal bell for alert cues; everything else is only logged.
pub struct BellSounds<W: Write> {
    out: W,
}

impl<W: Write> BellSounds<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> SoundSink for BellSounds<W> {
    fn play(&mut self, cue: Cue) {
        debug!(?cue, "sound cue");
        if !cue.is_alert() {
            return;
        }
        if let Err(err) = self.out.write_all(b"\x07").and_then(|_| self.out.flush()) {
            warn!(%err, "terminal bell failed");
        }
    }
}
