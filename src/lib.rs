//! Terminal space invaders.
//!
//! A ship at the bottom of the screen shoots at a descending formation of
//! aliens that shoot back.  Clearing a formation starts the next, faster
//! round; losing every life resets the game.
//!
//! The simulation runs in logical window units ([`config::GameConfig`]) and
//! is drawn through the [`display::Canvas`] trait, so everything except the
//! frame loop in `main.rs` can be driven headless.

pub mod config;
pub mod craft;
pub mod director;
pub mod display;
pub mod enemy;
pub mod entities;
pub mod error;
pub mod input;
pub mod projectile;
pub mod sound;
pub mod tick;

pub use config::GameConfig;
pub use craft::PlayerCraft;
pub use director::{LifeLoss, Phase, Prompt, RoundDirector, StepOutcome};
pub use enemy::Enemy;
pub use error::{GameError, Result};
pub use projectile::Projectile;
