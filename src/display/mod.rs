/// Rendering layer.
///
/// Game objects draw through the [`Canvas`] trait in logical window units;
/// [`TerminalCanvas`] maps those onto the terminal's cell grid.  The HUD and
/// prompt layouts live here so every canvas draws them the same way.

pub mod terminal;

pub use terminal::TerminalCanvas;

use crate::config::GameConfig;
use crate::entities::{Rect, SpriteKind};

/// Which point of a text block `(x, y)` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
}

pub trait Canvas {
    /// Wipe the whole surface to the background.
    fn clear(&mut self);
    fn blit(&mut self, sprite: SpriteKind, rect: Rect);
    fn text(&mut self, text: &str, x: i32, y: i32, anchor: Anchor);
    /// Horizontal divider from `x0` to `x1` at height `y`.
    fn hline(&mut self, y: i32, x0: i32, x1: i32);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Round top-left, score top-center, lives top-right, then the divider under
/// the text and the divider on the breach line.
pub fn draw_hud(canvas: &mut dyn Canvas, config: &GameConfig, score: u32, round: u32, lives: u32) {
    let w = config.window_width;
    let (pad_x, pad_y) = (config.hud_pad_x, config.hud_pad_y);

    canvas.text(&format!("Score: {score}"), w / 2, pad_y, Anchor::TopCenter);
    canvas.text(&format!("Round: {round}"), pad_x, pad_y, Anchor::TopLeft);
    canvas.text(&format!("Lives: {lives}"), w - pad_x, pad_y, Anchor::TopRight);

    canvas.hline(config.hud_divider_y(), pad_x, w - pad_x);
    canvas.hline(config.breach_line(), pad_x, w - pad_x);
}

// ── Prompts ───────────────────────────────────────────────────────────────────

pub fn draw_prompt(canvas: &mut dyn Canvas, config: &GameConfig, headline: &str, subtext: &str) {
    let cx = config.window_width / 2;
    let cy = config.window_height / 2;
    canvas.text(headline, cx, cy, Anchor::Center);
    if !subtext.is_empty() {
        canvas.text(subtext, cx, cy + config.font_size + 10, Anchor::Center);
    }
}
