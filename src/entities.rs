/// Plain data shared by every game object — geometry and sprite identity.

// ── Rectangles ────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical window units.
///
/// `right()` and `bottom()` are exclusive, so two rectangles that merely
/// share an edge do not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rectangle whose center is `(cx, cy)`.
    pub fn centered_at(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }

    /// A `w`×`h` rectangle horizontally centered on `cx` with its bottom edge on `bottom`.
    pub fn with_bottom_center(cx: i32, bottom: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, bottom - h, w, h)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_center_x(&mut self, cx: i32) {
        self.x = cx - self.w / 2;
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Headings ──────────────────────────────────────────────────────────────────

/// Vertical travel direction of a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// Towards the top of the window (player shots).
    Up,
    /// Towards the bottom of the window (alien shots).
    Down,
}

impl Heading {
    /// Sign applied to the y velocity: -1 for up, +1 for down.
    pub fn sign(self) -> i32 {
        match self {
            Heading::Up => -1,
            Heading::Down => 1,
        }
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// What a canvas is asked to draw inside a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    PlayerShip,
    Alien,
    PlayerLaser,
    AlienLaser,
}
