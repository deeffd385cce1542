/// The player's ship.

use tracing::debug;

use crate::config::GameConfig;
use crate::display::Canvas;
use crate::entities::{Heading, Rect, SpriteKind};
use crate::projectile::{self, BoltSpec, Projectile};
use crate::sound::{Cue, SoundSink};
use crate::tick::{Frame, Tickable};

#[derive(Clone, Debug)]
pub struct PlayerCraft {
    rect: Rect,
    velocity: i32,
    lives: u32,
    start_lives: u32,
    capacity: usize,
    window_width: i32,
    bolt: BoltSpec,
    projectiles: Vec<Projectile>,
}

impl PlayerCraft {
    /// A ship centered on the bottom edge of the window with full lives.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::with_bottom_center(
                config.window_width / 2,
                config.window_height,
                config.ship_width,
                config.ship_height,
            ),
            velocity: config.ship_velocity,
            lives: config.ship_lives,
            start_lives: config.ship_lives,
            capacity: config.ship_bullet_capacity,
            window_width: config.window_width,
            bolt: BoltSpec::from_config(config),
            projectiles: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub(crate) fn projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.projectiles
    }

    /// Bounds checking is the caller's job; see [`PlayerCraft::can_move_left`].
    pub fn move_left(&mut self) {
        self.rect.x -= self.velocity;
    }

    pub fn move_right(&mut self) {
        self.rect.x += self.velocity;
    }

    pub fn can_move_left(&self) -> bool {
        self.rect.left() > 0
    }

    pub fn can_move_right(&self) -> bool {
        self.rect.right() < self.window_width
    }

    /// Launch a bolt from the ship's center.
    ///
    /// Refused (returns `false`) while `capacity` bolts are still on screen:
    /// the magazine only refills as earlier shots leave the window or hit.
    pub fn fire(&mut self, sounds: &mut dyn SoundSink) -> bool {
        if self.projectiles.len() >= self.capacity {
            debug!(in_flight = self.projectiles.len(), "fire refused, magazine empty");
            return false;
        }
        self.projectiles.push(Projectile::new(
            self.bolt,
            self.rect.center_x(),
            self.rect.center_y(),
            Heading::Up,
        ));
        sounds.play(Cue::PlayerFire);
        true
    }

    pub fn reset_position(&mut self) {
        self.rect.set_center_x(self.window_width / 2);
    }

    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn restore_lives(&mut self) {
        self.lives = self.start_lives;
    }
}

impl Tickable for PlayerCraft {
    fn advance(&mut self, frame: &mut Frame<'_>) {
        projectile::advance_all(&mut self.projectiles, frame);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.blit(SpriteKind::PlayerShip, self.rect);
        for p in &self.projectiles {
            p.render(canvas);
        }
    }
}
