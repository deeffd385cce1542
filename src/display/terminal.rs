/// Cell-grid canvas presented through crossterm.
///
/// Drawing only touches an in-memory grid, so it cannot fail; all terminal
/// I/O happens in [`TerminalCanvas::present`].

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use super::{Anchor, Canvas};
use crate::config::GameConfig;
use crate::entities::{Rect, SpriteKind};
use crate::error::{GameError, Result};

pub const MIN_COLS: u16 = 60;
pub const MIN_ROWS: u16 = 20;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Reset;
const C_TEXT: Color = Color::Yellow;
const C_DIVIDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Green;
const C_LASER_PLAYER: Color = Color::Cyan;
const C_LASER_ALIEN: Color = Color::Magenta;

// ── Sprite art ────────────────────────────────────────────────────────────────

//   ▲
//  /█\
const SHIP_ART: &[&str] = &[" ▲ ", "/█\\"];
//  «▼»
//  ╚═╝
const ALIEN_ART: &[&str] = &["«▼»", "╚═╝"];
const PLAYER_LASER_ART: &[&str] = &["║"];
const ALIEN_LASER_ART: &[&str] = &["↓"];

/// Glyph rows for a sprite; spaces are transparent.
fn art(sprite: SpriteKind) -> (&'static [&'static str], Color) {
    match sprite {
        SpriteKind::PlayerShip => (SHIP_ART, C_PLAYER),
        SpriteKind::Alien => (ALIEN_ART, C_ALIEN),
        SpriteKind::PlayerLaser => (PLAYER_LASER_ART, C_LASER_PLAYER),
        SpriteKind::AlienLaser => (ALIEN_LASER_ART, C_LASER_ALIEN),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: C_BACKGROUND,
};

pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    world_w: i32,
    world_h: i32,
    cells: Vec<Cell>,
}

impl TerminalCanvas {
    /// A canvas covering a `cols`×`rows` terminal.
    pub fn new(cols: u16, rows: u16, config: &GameConfig) -> Result<Self> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                min_cols: MIN_COLS,
                min_rows: MIN_ROWS,
            });
        }
        Ok(Self {
            cols,
            rows,
            world_w: config.window_width,
            world_h: config.window_height,
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Terminal column holding logical x (clamped to the grid).
    pub fn col_of(&self, x: i32) -> i32 {
        let col = i64::from(x) * i64::from(self.cols) / i64::from(self.world_w);
        col.clamp(0, i64::from(self.cols) - 1) as i32
    }

    /// Terminal row holding logical y (clamped to the grid).
    pub fn row_of(&self, y: i32) -> i32 {
        let row = i64::from(y) * i64::from(self.rows) / i64::from(self.world_h);
        row.clamp(0, i64::from(self.rows) - 1) as i32
    }

    /// The characters of one row, for inspection.
    pub fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = Cell { ch, color };
    }

    fn put_str(&mut self, col: i32, row: i32, s: &str, color: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    /// Write the grid to `out` and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let line = &self.cells[start..start + self.cols as usize];

            // Batch runs of the same colour into one Print
            let mut run = String::new();
            let mut run_color = line[0].color;
            for cell in line {
                if cell.color != run_color {
                    out.queue(style::SetForegroundColor(run_color))?;
                    out.queue(Print(&run))?;
                    run.clear();
                    run_color = cell.color;
                }
                run.push(cell.ch);
            }
            out.queue(style::SetForegroundColor(run_color))?;
            out.queue(Print(&run))?;
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl Canvas for TerminalCanvas {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn blit(&mut self, sprite: SpriteKind, rect: Rect) {
        let (lines, color) = art(sprite);
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let left = self.col_of(rect.center_x()) - width / 2;
        let top = self.row_of(rect.center_y()) - lines.len() as i32 / 2;
        for (dy, line) in lines.iter().enumerate() {
            for (dx, ch) in line.chars().enumerate() {
                if ch != ' ' {
                    self.put(left + dx as i32, top + dy as i32, ch, color);
                }
            }
        }
    }

    fn text(&mut self, text: &str, x: i32, y: i32, anchor: Anchor) {
        let len = text.chars().count() as i32;
        let col = self.col_of(x);
        let row = self.row_of(y);
        let start = match anchor {
            Anchor::TopLeft => col,
            Anchor::TopCenter | Anchor::Center => col - len / 2,
            Anchor::TopRight => col - len,
        };
        self.put_str(start, row, text, C_TEXT);
    }

    fn hline(&mut self, y: i32, x0: i32, x1: i32) {
        let row = self.row_of(y);
        for col in self.col_of(x0)..=self.col_of(x1) {
            self.put(col, row, '─', C_DIVIDER);
        }
    }
}
