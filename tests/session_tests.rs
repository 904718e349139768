//! End-to-end tests: session against the simulated engine, rendered through
//! the demo view.

use event3d::audio::{BankCatalog, PlaybackState, SimulatedEngine};
use event3d::engine::{DemoConfig, Session};
use event3d::input::InputBatch;
use event3d::term::{DemoView, Tone, Viewport, HEADER_LINES};
use event3d::types::{MoveAction, Vector3, SCREEN_HEIGHT};

use crossterm::event::{KeyCode, KeyEvent};

fn start() -> Session<SimulatedEngine> {
    Session::start(
        SimulatedEngine::new(BankCatalog::vehicles_demo()),
        &DemoConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_keys_drive_event_and_view() {
    let mut session = start();

    let mut batch = InputBatch::new();
    for code in [KeyCode::Right, KeyCode::Right, KeyCode::Up] {
        batch.push_key(KeyEvent::from(code));
    }
    for &action in batch.actions() {
        session.apply(action).unwrap();
    }
    session.frame().unwrap();

    assert_eq!(session.event().position, Vector3::new(2.0, 0.0, 3.0));

    let view = DemoView::default();
    let fb = view.render(session.grid(), session.event(), Viewport::new(80, 30));

    // Grid starts below the header; event at row 8 - 3 = 5, col 25 + 2 = 27.
    let top = HEADER_LINES.len() as u16;
    let event_cell = fb.get(27, top + 5).unwrap();
    assert_eq!(event_cell.ch, 'o');
    assert_eq!(event_cell.tone, Tone::Event);
    let listener_cell = fb.get(25, top + 8).unwrap();
    assert_eq!(listener_cell.ch, '^');
    assert_eq!(listener_cell.tone, Tone::Listener);

    let footer = top + SCREEN_HEIGHT;
    assert!(fb
        .row_text(footer)
        .unwrap()
        .starts_with("Use the arrow keys (Left, Right, Up, Down)"));
    assert!(fb.row_text(footer + 1).unwrap().starts_with("Press Q to quit"));
    assert!(fb
        .row_text(footer + 2)
        .unwrap()
        .starts_with("Event position: (2.0, 0.0, 3.0)"));
}

#[test]
fn test_header_lines_render_first() {
    let mut session = start();
    session.frame().unwrap();
    let fb = DemoView::default().render(session.grid(), session.event(), Viewport::new(60, 25));

    for (y, line) in HEADER_LINES.iter().enumerate() {
        assert!(fb.row_text(y as u16).unwrap().starts_with(line));
    }
    assert_eq!(fb.get(0, 1).unwrap().tone, Tone::Header);
}

#[test]
fn test_small_viewport_clips_without_panicking() {
    let mut session = start();
    session.frame().unwrap();
    let fb = DemoView::default().render(session.grid(), session.event(), Viewport::new(10, 6));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 6);
    assert!(fb.row_text(0).unwrap().starts_with("=========="));
}

#[test]
fn test_event_walks_off_grid_and_back() {
    let mut session = start();

    // From z = 2 up to z = 8 puts the event on the excluded top row.
    for _ in 0..6 {
        session.apply(MoveAction::Up).unwrap();
    }
    session.frame().unwrap();
    assert_eq!(session.grid().cursor(), None);

    session.apply(MoveAction::Down).unwrap();
    session.frame().unwrap();
    assert!(session.grid().cursor().is_some());
}

#[test]
fn test_engine_clock_follows_frames() {
    let mut session = start();
    for _ in 0..5 {
        session.frame().unwrap();
    }
    assert_eq!(session.engine().frame(), 5);
    let state = session.engine().instance(session.instance()).unwrap();
    assert_eq!(state.state, PlaybackState::Playing);
    session.shutdown().unwrap();
}
