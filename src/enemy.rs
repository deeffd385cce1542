/// A single alien in the formation.

use rand::{Rng, RngCore};

use crate::config::GameConfig;
use crate::display::Canvas;
use crate::entities::{Heading, Rect, SpriteKind};
use crate::projectile::{self, BoltSpec, Projectile};
use crate::sound::{Cue, SoundSink};
use crate::tick::{Frame, Tickable};

#[derive(Clone, Debug)]
pub struct Enemy {
    rect: Rect,
    velocity: i32,
    /// +1 moving right, -1 moving left.  Only the director flips it.
    direction: i32,
    fire_chance: f64,
    capacity: usize,
    bolt: BoltSpec,
    projectiles: Vec<Projectile>,
}

impl Enemy {
    /// An alien with its top-left corner at `(x, y)`, heading right.
    pub fn new(config: &GameConfig, x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, config.alien_width, config.alien_height),
            velocity: config.alien_velocity,
            direction: 1,
            fire_chance: config.alien_fire_chance,
            capacity: config.alien_bullet_capacity,
            bolt: BoltSpec::from_config(config),
            projectiles: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub(crate) fn projectiles_mut(&mut self) -> &mut Vec<Projectile> {
        &mut self.projectiles
    }

    /// Horizontal displacement for one tick at `round`.
    fn stride(&self, round: u32) -> i32 {
        self.direction * self.velocity * round as i32
    }

    /// Maybe shoot downwards from the alien's center.
    ///
    /// Fires with probability `fire_chance` and only while fewer than
    /// `capacity` of its bolts are still in flight.
    pub fn try_fire(&mut self, rng: &mut dyn RngCore, sounds: &mut dyn SoundSink) -> bool {
        if self.projectiles.len() >= self.capacity || !rng.gen_bool(self.fire_chance) {
            return false;
        }
        self.projectiles.push(Projectile::new(
            self.bolt,
            self.rect.center_x(),
            self.rect.center_y(),
            Heading::Down,
        ));
        sounds.play(Cue::EnemyFire);
        true
    }

    /// Formation advance: drop by `drop`, turn around and take this tick's
    /// step in the new direction.
    pub fn reverse(&mut self, drop: i32, round: u32) {
        self.rect.y += drop;
        self.direction = -self.direction;
        self.rect.x += self.stride(round);
    }

    pub fn touches_side(&self, window_width: i32) -> bool {
        self.rect.right() >= window_width || self.rect.left() <= 0
    }

    /// Teleport the top-left corner to `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }
}

impl Tickable for Enemy {
    fn advance(&mut self, frame: &mut Frame<'_>) {
        self.rect.x += self.stride(frame.round);
        self.try_fire(&mut *frame.rng, &mut *frame.sounds);
        projectile::advance_all(&mut self.projectiles, frame);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.blit(SpriteKind::Alien, self.rect);
        for p in &self.projectiles {
            p.render(canvas);
        }
    }
}
