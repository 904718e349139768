//! Event 3D demo runner (default binary).
//!
//! Positions one sound event around a listener. Arrow keys move the event;
//! the terminal shows a top-down view with the listener (`^`) and the event
//! (`o`). The audio engine is the in-process simulated middleware.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use event3d::audio::{AudioEngine, BankCatalog, SimulatedEngine};
use event3d::engine::{DemoConfig, Session};
use event3d::input::{key_label, poll_input};
use event3d::term::{DemoView, FrameBuffer, KeyHints, TerminalRenderer, Viewport};
use event3d::types::MoveAction;

fn main() -> Result<()> {
    let config = DemoConfig::from_env();
    init_logging(&config)?;

    let session = Session::start(SimulatedEngine::new(BankCatalog::vehicles_demo()), &config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }
    result
}

/// Log to `EVENT3D_LOG_PATH` when set; stdout belongs to the display.
fn init_logging(config: &DemoConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run<A: AudioEngine>(
    term: &mut TerminalRenderer,
    mut session: Session<A>,
    config: &DemoConfig,
) -> Result<()> {
    let view = DemoView::new(KeyHints {
        left: key_label(MoveAction::Left),
        right: key_label(MoveAction::Right),
        up: key_label(MoveAction::Up),
        down: key_label(MoveAction::Down),
        quit: "Q",
    });
    let frame_interval = config.frame_interval();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let frame_start = Instant::now();

        let input = poll_input(Duration::ZERO)?;
        if input.quit_requested() {
            break;
        }
        for &action in input.actions() {
            session.apply(action)?;
        }

        session.frame()?;

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.grid(), session.event(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        std::thread::sleep(frame_interval.saturating_sub(frame_start.elapsed()));
    }

    session.shutdown()
}
