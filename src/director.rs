/// Round director: owns the alien formation, the score and the round
/// counter, and decides what happens after every tick.
///
/// The player's ship is not owned here; the frame loop lends it to each call
/// that needs it.  Macro state (playing, paused, between rounds, ...) is a
/// queue of [`Prompt`]s: taking a transition applies its effects at once
/// and queues the prompt that explains it, and the simulation only advances
/// while the queue is empty.

use std::collections::VecDeque;

use rand::RngCore;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::craft::PlayerCraft;
use crate::display::{self, Canvas};
use crate::enemy::Enemy;
use crate::sound::{Cue, SoundSink};
use crate::tick::{Frame, Tickable};

// ── Phases and prompts ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    RoundTransition,
    LifeLost,
    GameOver,
}

/// A blocking message; the game waits on it until Enter is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    RoundStart(u32),
    Paused,
    ShipHit,
    Breached,
    GameOver,
    FinalScore(u32),
}

impl Prompt {
    pub fn phase(&self) -> Phase {
        match self {
            Prompt::RoundStart(_) => Phase::RoundTransition,
            Prompt::Paused => Phase::Paused,
            Prompt::ShipHit | Prompt::Breached => Phase::LifeLost,
            Prompt::GameOver | Prompt::FinalScore(_) => Phase::GameOver,
        }
    }

    pub fn headline(&self) -> String {
        match self {
            Prompt::RoundStart(round) => format!("Round: {round}"),
            Prompt::Paused => "Paused".to_string(),
            Prompt::ShipHit => "You've been hit.".to_string(),
            Prompt::Breached => "Breached".to_string(),
            Prompt::GameOver => "Gameover".to_string(),
            Prompt::FinalScore(score) => format!("Final score: {score}"),
        }
    }

    pub fn subtext(&self) -> &'static str {
        match self {
            Prompt::Breached => "You lose 1 life!",
            Prompt::GameOver => "",
            Prompt::FinalScore(_) => "Press 'Enter' to reset the game",
            _ => "Press 'Enter' to continue!",
        }
    }
}

/// Why a life was lost.  The two causes reset different amounts of state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeLoss {
    /// An alien bolt struck the ship; the formation stays where it is.
    ShipHit,
    /// An alien crossed the breach line; the formation is replaced.
    Breach,
}

/// What happened during one [`RoundDirector::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub kills: u32,
    pub ship_hit: bool,
    pub breached: bool,
    pub round_cleared: bool,
    pub game_over: bool,
}

// ── Director ──────────────────────────────────────────────────────────────────

pub struct RoundDirector {
    config: GameConfig,
    enemies: Vec<Enemy>,
    score: u32,
    round: u32,
    prompts: VecDeque<Prompt>,
}

impl RoundDirector {
    /// A fresh game at round 1 with a full formation, waiting on the
    /// round-start prompt.
    pub fn new(config: &GameConfig) -> Self {
        let mut director = Self {
            config: config.clone(),
            enemies: Vec::new(),
            score: 0,
            round: 1,
            prompts: VecDeque::new(),
        };
        director.populate();
        director.prompts.push_back(Prompt::RoundStart(1));
        director
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// The prompt currently on screen, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompts.front()
    }

    pub fn phase(&self) -> Phase {
        self.prompt().map_or(Phase::Playing, Prompt::phase)
    }

    pub fn is_playing(&self) -> bool {
        self.prompts.is_empty()
    }

    // ── Prompt handling ───────────────────────────────────────────────────────

    /// Dismiss the current prompt.  Returns the prompt that was dismissed.
    pub fn confirm(&mut self) -> Option<Prompt> {
        let dismissed = self.prompts.pop_front();
        if let Some(prompt) = &dismissed {
            debug!(?prompt, "prompt dismissed");
        }
        dismissed
    }

    /// Pause a running game.  Ignored while a prompt is already showing.
    pub fn pause(&mut self) {
        if self.is_playing() {
            info!(round = self.round, score = self.score, "paused");
            self.prompts.push_back(Prompt::Paused);
        }
    }

    /// Enter pauses a running game and dismisses a prompt otherwise.
    pub fn handle_enter(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.confirm();
        }
    }

    // ── Formation ─────────────────────────────────────────────────────────────

    /// Add a full rows × cols grid of aliens.
    pub fn populate(&mut self) {
        let c = &self.config;
        for row in 0..c.alien_rows as i32 {
            for col in 0..c.alien_cols as i32 {
                let x = c.alien_origin_x + c.alien_pitch * col;
                let y = c.alien_origin_y + c.alien_pitch * row;
                self.enemies.push(Enemy::new(c, x, y));
            }
        }
    }

    /// If any alien touches a side of the window, the whole formation drops
    /// one increment and turns around.  Returns whether it did.
    pub fn advance_formation(&mut self) -> bool {
        let width = self.config.window_width;
        if !self.enemies.iter().any(|e| e.touches_side(width)) {
            return false;
        }
        let (descent, round) = (self.config.alien_advance_increment, self.round);
        for enemy in &mut self.enemies {
            enemy.reverse(descent, round);
        }
        true
    }

    /// True if any alien's bottom edge is below the breach line.
    pub fn is_breached(&self) -> bool {
        let line = self.config.breach_line();
        self.enemies.iter().any(|e| e.rect().bottom() > line)
    }

    // ── Collisions ────────────────────────────────────────────────────────────

    /// Match player bolts against aliens.
    ///
    /// Each bolt destroys at most one alien (the first it overlaps) and is
    /// consumed with it.  Every kill is scored.  Returns the number of kills.
    pub fn resolve_enemy_hits(&mut self, craft: &mut PlayerCraft) -> u32 {
        let enemies = &self.enemies;
        let mut dead = vec![false; enemies.len()];
        let mut kills: u32 = 0;

        craft.projectiles_mut().retain(|bolt| {
            let target = enemies
                .iter()
                .zip(dead.iter())
                .position(|(e, &gone)| !gone && e.rect().overlaps(&bolt.rect()));
            match target {
                Some(i) => {
                    dead[i] = true;
                    kills += 1;
                    false
                }
                None => true,
            }
        });

        let mut flags = dead.into_iter();
        self.enemies.retain(|_| !flags.next().unwrap_or(false));
        self.score = self.score.saturating_add(kills.saturating_mul(self.config.kill_score));
        kills
    }

    /// Match alien bolts against the ship.
    ///
    /// Scans aliens in order and stops at the first one with a bolt on the
    /// ship; that alien's overlapping bolts are consumed.
    pub fn resolve_ship_hit(&mut self, craft: &PlayerCraft) -> bool {
        let ship = craft.rect();
        for enemy in &mut self.enemies {
            let bolts = enemy.projectiles_mut();
            let before = bolts.len();
            bolts.retain(|b| !b.rect().overlaps(&ship));
            if bolts.len() != before {
                return true;
            }
        }
        false
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    /// Formation cleared: next round, faster aliens.
    pub fn next_round(&mut self, craft: &mut PlayerCraft, sounds: &mut dyn SoundSink) {
        self.round += 1;
        craft.clear_projectiles();
        craft.reset_position();
        self.enemies.clear();
        self.populate();
        sounds.play(Cue::NextRound);
        info!(round = self.round, score = self.score, "round cleared");
        self.prompts.push_back(Prompt::RoundStart(self.round));
    }

    /// Take a life and reset the play field for `cause`.
    ///
    /// A ship hit leaves the formation in place; a breach replaces it.
    pub fn lose_life(
        &mut self,
        craft: &mut PlayerCraft,
        cause: LifeLoss,
        sounds: &mut dyn SoundSink,
    ) {
        craft.lose_life();
        craft.clear_projectiles();
        craft.reset_position();
        let prompt = match cause {
            LifeLoss::ShipHit => {
                sounds.play(Cue::PlayerHit);
                Prompt::ShipHit
            }
            LifeLoss::Breach => {
                self.enemies.clear();
                self.populate();
                sounds.play(Cue::Breach);
                Prompt::Breached
            }
        };
        info!(?cause, lives = craft.lives(), round = self.round, "life lost");
        self.prompts.push_back(prompt);
    }

    /// Start over from round 1 with full lives and no score.
    pub fn reset_game(&mut self, craft: &mut PlayerCraft) {
        self.score = 0;
        self.round = 1;
        craft.restore_lives();
        craft.clear_projectiles();
        craft.reset_position();
        self.enemies.clear();
        self.populate();
    }

    fn game_over(&mut self, craft: &mut PlayerCraft) {
        let final_score = self.score;
        info!(final_score, round = self.round, "game over");
        self.reset_game(craft);
        self.prompts.push_back(Prompt::GameOver);
        self.prompts.push_back(Prompt::FinalScore(final_score));
    }

    // ── Per-frame driver ──────────────────────────────────────────────────────

    /// Run one tick of play.  Does nothing while a prompt is showing.
    pub fn step(
        &mut self,
        craft: &mut PlayerCraft,
        rng: &mut dyn RngCore,
        sounds: &mut dyn SoundSink,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !self.is_playing() {
            return outcome;
        }

        {
            let mut frame = Frame::new(self.round, rng, sounds);
            craft.advance(&mut frame);
            for enemy in &mut self.enemies {
                enemy.advance(&mut frame);
            }
        }
        self.advance_formation();

        outcome.kills = self.resolve_enemy_hits(craft);
        if outcome.kills > 0 {
            sounds.play(Cue::EnemyHit);
            debug!(kills = outcome.kills, score = self.score, "aliens destroyed");
        }

        if self.resolve_ship_hit(craft) {
            outcome.ship_hit = true;
            self.lose_life(craft, LifeLoss::ShipHit, sounds);
        } else if self.is_breached() {
            outcome.breached = true;
            self.lose_life(craft, LifeLoss::Breach, sounds);
        }

        // The game-over reset also rebuilds the formation, so a wave emptied
        // in the same tick does not advance the round.
        if craft.lives() == 0 {
            outcome.game_over = true;
            self.game_over(craft);
        } else if self.enemies.is_empty() {
            outcome.round_cleared = true;
            self.next_round(craft, sounds);
        }
        outcome
    }

    /// Draw the current frame: either the front prompt alone, or the play
    /// field with its HUD.
    pub fn render(&self, craft: &PlayerCraft, canvas: &mut dyn Canvas) {
        canvas.clear();
        if let Some(prompt) = self.prompt() {
            display::draw_prompt(canvas, &self.config, &prompt.headline(), prompt.subtext());
            return;
        }
        craft.render(canvas);
        for enemy in &self.enemies {
            enemy.render(canvas);
        }
        display::draw_hud(canvas, &self.config, self.score, self.round, craft.lives());
    }
}
