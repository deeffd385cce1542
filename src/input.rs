/// Keyboard model.
///
/// Terminals report key presses, but many never report releases.  Instead of
/// acting on each event, the tracker records the frame in which every key was
/// last pressed or repeated and treats a key as held while that record is
/// fresh (within [`HOLD_WINDOW`] frames).  Terminals with keyboard
/// enhancement send proper releases, which drop the key at once.
///
/// Fire, Enter and quit are edge-triggered: one action per press.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key counts as held for this many frames after its last press/repeat.
/// OS key repeat runs at ≥ 15 Hz, so at 60 FPS a window of 8 frames
/// (≈133 ms) is refreshed before it runs out.
pub const HOLD_WINDOW: u64 = 8;

/// What the player asked for during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub enter: bool,
    pub quit: bool,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    fire: bool,
    enter: bool,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once at the top of every frame, before feeding events.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn handle(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return;
        };
        match kind {
            KeyEventKind::Press => {
                self.key_frame.insert(*code, self.frame);
                match code {
                    KeyCode::Char(' ') => self.fire = true,
                    KeyCode::Enter => self.enter = true,
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true;
                    }
                    _ => {}
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(*code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
            }
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }

    /// Held movement for this frame plus the edges seen since the last call.
    pub fn take_controls(&mut self) -> Controls {
        let controls = Controls {
            left: self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
            right: self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
            fire: self.fire,
            enter: self.enter,
            quit: self.quit,
        };
        self.fire = false;
        self.enter = false;
        controls
    }
}
