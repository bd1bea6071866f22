//! Terminal runner (default binary).
//!
//! Loads configuration, opens the optional event log, then runs the frame
//! loop: poll keys until the next frame is due, sample held intents, advance
//! the session, render.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use photon_blocks::core::SoftDropMode;
use photon_blocks::engine::{
    parse_soft_drop, EventLog, FrameClock, FrameOutcome, RuntimeConfig, Session, SessionSummary,
};
use photon_blocks::input::KeyTracker;
use photon_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use photon_blocks::types::FRAME_MS;

#[derive(Parser, Debug)]
#[command(name = "photon-blocks", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// JSON file with engine settings (durations in milliseconds)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed piece-supply seed
    #[arg(long)]
    seed: Option<u64>,

    /// Soft drop speed: slow, normal or fast
    #[arg(long, value_name = "MODE", value_parser = parse_soft_drop)]
    soft_drop: Option<SoftDropMode>,

    /// Append engine events to FILE as JSON lines
    #[arg(long, value_name = "FILE")]
    log_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut cfg = RuntimeConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        cfg.engine.seed = Some(seed);
    }
    if let Some(mode) = args.soft_drop {
        cfg.engine.soft_drop = mode;
    }
    if let Some(path) = args.log_path {
        cfg.log_path = Some(path);
    }
    cfg.validate()?;

    // Open the log before touching the terminal so errors print normally.
    let summary = match cfg.log_path.as_deref() {
        Some(path) => {
            let log = EventLog::open(path)?;
            with_terminal(Session::with_log(cfg.engine, log)?)?
        }
        None => with_terminal(Session::new(cfg.engine))?,
    };

    eprintln!(
        "[photon-blocks] seed {} | score {} | lines {} | level {} | games {}",
        summary.seed, summary.score, summary.lines, summary.level, summary.games
    );
    Ok(())
}

fn with_terminal<W: Write>(session: Session<W>) -> Result<SessionSummary> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<W: Write>(term: &mut TerminalRenderer, mut session: Session<W>) -> Result<SessionSummary> {
    let view = GameView::default();
    let mut tracker = KeyTracker::new();
    let mut clock = FrameClock::new(Duration::from_millis(FRAME_MS));
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        while event::poll(clock.time_until_next())? {
            match event::read()? {
                Event::Key(key) => {
                    tracker.handle_key(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                Event::FocusLost => tracker.clear(),
                _ => {}
            }
        }

        let dt = clock.tick();
        let intents = tracker.sample(Instant::now());
        match session.frame(dt, intents)? {
            FrameOutcome::Quit => break,
            FrameOutcome::Continue(snap) => {
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                view.render_into(&snap, Viewport::new(w, h), &mut fb);
                term.draw_swap(&mut fb)?;
            }
        }
    }

    let (summary, _) = session.finish()?;
    Ok(summary)
}
