/// A laser bolt travelling straight up or down.

use crate::config::GameConfig;
use crate::display::Canvas;
use crate::entities::{Heading, Rect, SpriteKind};
use crate::tick::{Frame, Tickable};

/// Size and speed of a bolt, copied out of the config by whoever fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoltSpec {
    pub width: i32,
    pub height: i32,
    pub velocity: i32,
    pub play_height: i32,
}

impl BoltSpec {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            width: config.bullet_width,
            height: config.bullet_height,
            velocity: config.bullet_velocity,
            play_height: config.window_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    rect: Rect,
    heading: Heading,
    velocity: i32,
    /// Bottom of the visible area; the top is always 0.
    play_height: i32,
}

impl Projectile {
    /// Spawn a bolt centered on `(cx, cy)`.
    pub fn new(spec: BoltSpec, cx: i32, cy: i32, heading: Heading) -> Self {
        Self {
            rect: Rect::centered_at(cx, cy, spec.width, spec.height),
            heading,
            velocity: spec.velocity,
            play_height: spec.play_height,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Move one step along the heading.
    pub fn step(&mut self) {
        self.rect.y += self.heading.sign() * self.velocity;
    }

    /// True once the bolt lies entirely above the top or below the bottom.
    pub fn is_expired(&self) -> bool {
        self.rect.bottom() < 0 || self.rect.top() > self.play_height
    }

    fn sprite(&self) -> SpriteKind {
        match self.heading {
            Heading::Up => SpriteKind::PlayerLaser,
            Heading::Down => SpriteKind::AlienLaser,
        }
    }
}

impl Tickable for Projectile {
    fn advance(&mut self, _frame: &mut Frame<'_>) {
        self.step();
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.blit(self.sprite(), self.rect);
    }
}

/// Step every bolt and drop the ones that left the screen.
pub(crate) fn advance_all(projectiles: &mut Vec<Projectile>, frame: &mut Frame<'_>) {
    for p in projectiles.iter_mut() {
        p.advance(frame);
    }
    projectiles.retain(|p| !p.is_expired());
}
