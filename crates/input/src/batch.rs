//! Per-frame input collection.
//!
//! The loop reads input once per iteration: everything pending is drained
//! into a fixed-capacity batch, so a burst of key repeats cannot allocate.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::MoveAction;

/// Actions kept per frame; extra presses in the same frame are dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 16;

/// Input gathered for one loop iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    actions: ArrayVec<MoveAction, MAX_ACTIONS_PER_FRAME>,
    quit: bool,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Returns true if it was used.
    ///
    /// Presses and auto-repeats count; releases are ignored.
    pub fn push_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if should_quit(key) {
            self.quit = true;
            return true;
        }
        match handle_key_event(key) {
            Some(action) => self.actions.try_push(action).is_ok(),
            None => false,
        }
    }

    pub fn actions(&self) -> &[MoveAction] {
        &self.actions
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && !self.quit
    }
}

/// Wait up to `timeout` for input, then drain whatever else is pending.
pub fn poll_input(timeout: Duration) -> io::Result<InputBatch> {
    let mut batch = InputBatch::new();
    let mut wait = timeout;
    while event::poll(wait)? {
        if let Event::Key(key) = event::read()? {
            batch.push_key(key);
        }
        wait = Duration::ZERO;
    }
    Ok(batch)
}
