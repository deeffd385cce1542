//! Game tunables.
//!
//! A single immutable [`GameConfig`] is built at startup and handed to every
//! constructor that needs a tunable.  Values are in logical window units
//! (the renderer scales them onto the terminal grid).  Any subset of fields
//! may be overridden from a JSON file named by `INVADERS_CONFIG`.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Environment variable naming an optional JSON override file.
pub const CONFIG_ENV: &str = "INVADERS_CONFIG";

/// Largest accepted `kill_score`.
pub const MAX_KILL_SCORE: u32 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    // ── Window ───────────────────────────────────────────────────────────────
    pub window_width: i32,
    pub window_height: i32,
    /// Frame-rate cap of the main loop.
    pub fps: u32,

    // ── Player ship ──────────────────────────────────────────────────────────
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_velocity: i32,
    pub ship_lives: u32,
    /// Shots that may be on screen at once; firing is refused beyond this.
    pub ship_bullet_capacity: usize,

    // ── Bullets (shared by both sides) ───────────────────────────────────────
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_velocity: i32,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_width: i32,
    pub alien_height: i32,
    /// Horizontal speed at round 1; multiplied by the round number.
    pub alien_velocity: i32,
    pub alien_rows: usize,
    pub alien_cols: usize,
    pub alien_origin_x: i32,
    pub alien_origin_y: i32,
    /// Distance between neighbouring grid slots, both axes.
    pub alien_pitch: i32,
    /// Vertical drop applied on every formation advance.
    pub alien_advance_increment: i32,
    /// Per-alien, per-tick probability of firing.
    pub alien_fire_chance: f64,
    pub alien_bullet_capacity: usize,

    // ── Rules ────────────────────────────────────────────────────────────────
    /// Distance of the breach line above the window bottom.
    pub breach_margin: i32,
    pub kill_score: u32,

    // ── HUD layout ───────────────────────────────────────────────────────────
    pub hud_pad_x: i32,
    pub hud_pad_y: i32,
    pub font_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 700,
            fps: 60,

            ship_width: 64,
            ship_height: 64,
            ship_velocity: 8,
            ship_lives: 3,
            ship_bullet_capacity: 5,

            bullet_width: 8,
            bullet_height: 24,
            bullet_velocity: 10,

            alien_width: 64,
            alien_height: 64,
            alien_velocity: 1,
            alien_rows: 5,
            alien_cols: 6,
            alien_origin_x: 20,
            alien_origin_y: 100,
            alien_pitch: 70,
            alien_advance_increment: 10,
            alien_fire_chance: 0.001,
            alien_bullet_capacity: 2,

            breach_margin: 100,
            kill_score: 100,

            hud_pad_x: 10,
            hud_pad_y: 10,
            font_size: 32,
        }
    }
}

impl GameConfig {
    /// Parse a JSON override document on top of the defaults and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        };
        let json = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load using the file named by [`CONFIG_ENV`], if set.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV).map(std::path::PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Reject configurations that cannot produce a playable game.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_velocity", self.ship_velocity),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_velocity", self.bullet_velocity),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("alien_velocity", self.alien_velocity),
            ("alien_pitch", self.alien_pitch),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let speeds = [
            ("ship_velocity", self.ship_velocity),
            ("bullet_velocity", self.bullet_velocity),
            ("alien_velocity", self.alien_velocity),
        ];
        for (name, value) in speeds {
            if value > self.window_width {
                return Err(invalid(format!(
                    "{name} must be at most the window width {}, got {value}",
                    self.window_width
                )));
            }
        }
        if self.fps == 0 {
            return Err(invalid("fps must be positive".to_string()));
        }
        if self.ship_lives == 0 {
            return Err(invalid("ship_lives must be at least 1".to_string()));
        }
        if self.ship_bullet_capacity == 0 {
            return Err(invalid("ship_bullet_capacity must be at least 1".to_string()));
        }
        if self.alien_rows == 0 || self.alien_cols == 0 {
            return Err(invalid("alien grid must have at least one row and column".to_string()));
        }
        if !(0.0..=1.0).contains(&self.alien_fire_chance) {
            return Err(invalid(format!(
                "alien_fire_chance must be within [0, 1], got {}",
                self.alien_fire_chance
            )));
        }

        // Bounded before any arithmetic below or during play can overflow.
        if !(0..=self.window_height).contains(&self.breach_margin) {
            return Err(invalid(format!(
                "breach_margin must be within 0..={}, got {}",
                self.window_height, self.breach_margin
            )));
        }
        if !(0..=self.window_height).contains(&self.alien_advance_increment) {
            return Err(invalid(format!(
                "alien_advance_increment must be within 0..={}, got {}",
                self.window_height, self.alien_advance_increment
            )));
        }
        let layout = [
            ("font_size", self.font_size, self.window_height),
            ("hud_pad_x", self.hud_pad_x, self.window_width),
            ("hud_pad_y", self.hud_pad_y, self.window_height),
        ];
        for (name, value, max) in layout {
            if !(0..=max).contains(&value) {
                return Err(invalid(format!("{name} must be within 0..={max}, got {value}")));
            }
        }
        if self.kill_score > MAX_KILL_SCORE {
            return Err(invalid(format!(
                "kill_score must be at most {MAX_KILL_SCORE}, got {}",
                self.kill_score
            )));
        }

        // A grid that starts below the breach line would cost a life every tick.
        let grid_bottom =
            grid_extent(self.alien_origin_y, self.alien_rows, self.alien_pitch, self.alien_height)
                .ok_or_else(|| invalid(format!("{} alien rows do not fit the window", self.alien_rows)))?;
        if grid_bottom > self.breach_line() {
            return Err(invalid(format!(
                "alien grid bottom {grid_bottom} lies below the breach line {}",
                self.breach_line()
            )));
        }
        let grid_right =
            grid_extent(self.alien_origin_x, self.alien_cols, self.alien_pitch, self.alien_width)
                .ok_or_else(|| invalid(format!("{} alien columns do not fit the window", self.alien_cols)))?;
        if self.alien_origin_x <= 0 || grid_right >= self.window_width {
            return Err(invalid(format!(
                "alien grid spans x {}..{grid_right}, must fit strictly inside 0..{}",
                self.alien_origin_x, self.window_width
            )));
        }
        Ok(())
    }

    /// Aliens whose bottom edge passes this y have breached the defences.
    pub fn breach_line(&self) -> i32 {
        self.window_height - self.breach_margin
    }

    /// y of the divider drawn under the HUD text.
    pub fn hud_divider_y(&self) -> i32 {
        self.font_size + self.hud_pad_y + 10
    }

    /// Wall-clock length of one frame at the configured rate.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

/// Far edge of `count` slots `pitch` apart starting at `origin`, each
/// `size` long.  `None` if it does not fit in an `i32`.
fn grid_extent(origin: i32, count: usize, pitch: i32, size: i32) -> Option<i32> {
    let gaps = i32::try_from(count).ok()?.checked_sub(1)?;
    origin.checked_add(pitch.checked_mul(gaps)?)?.checked_add(size)
}

fn invalid(msg: String) -> GameError {
    GameError::InvalidConfig(msg)
}
