use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;
use tracing::{error, info, warn};
use tracing_subscriber::filter::EnvFilter;

use invaders::display::TerminalCanvas;
use invaders::input::InputTracker;
use invaders::sound::BellSounds;
use invaders::{GameConfig, PlayerCraft, RoundDirector};

/// Environment variable naming the log file.
const LOG_ENV: &str = "INVADERS_LOG";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is taken over by the game, so logs go to a file.
fn init_logging() -> anyhow::Result<PathBuf> {
    let path = std::env::var_os(LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("invaders.log"));
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// One iteration is one frame: drain input, apply it, step the director,
/// draw, then sleep off whatever is left of the frame budget.  Prompts
/// (round start, pause, life lost, game over) are director phases, so this
/// loop never blocks on them.
fn game_loop<W: Write>(
    out: &mut W,
    canvas: &mut TerminalCanvas,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    let mut sounds = BellSounds::new(stderr());
    let mut craft = PlayerCraft::new(config);
    let mut director = RoundDirector::new(config);
    let mut input = InputTracker::new();
    let budget = config.frame_budget();

    loop {
        let frame_start = Instant::now();
        input.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                match TerminalCanvas::new(cols, rows, config) {
                    Ok(resized) => {
                        *canvas = resized;
                        out.queue(terminal::Clear(terminal::ClearType::All))?;
                    }
                    Err(err) => warn!(%err, "keeping previous canvas size"),
                }
            }
            input.handle(&ev);
        }

        let controls = input.take_controls();
        if controls.quit {
            info!(score = director.score(), round = director.round(), "quit");
            return Ok(());
        }
        if controls.enter {
            director.handle_enter();
        }

        // ── Apply controls and advance ────────────────────────────────────────
        if director.is_playing() {
            if controls.left && craft.can_move_left() {
                craft.move_left();
            } else if controls.right && craft.can_move_right() {
                craft.move_right();
            }
            if controls.fire {
                craft.fire(&mut sounds);
            }
            director.step(&mut craft, &mut rng, &mut sounds);
        }

        director.render(&craft, canvas);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let log_path = init_logging()?;
    let config = GameConfig::from_env().context("loading game configuration")?;
    info!(log = %log_path.display(), ?config, "starting");

    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let mut canvas = TerminalCanvas::new(cols, rows, &config)?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events where the terminal supports them; others fall back
    // to the hold window in `InputTracker`.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread and arrive over a
    // channel, so the game loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut canvas, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}
