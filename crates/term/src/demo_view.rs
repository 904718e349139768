//! DemoView: lays out the header, the position grid and the control hints.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::PositionGrid;
use crate::fb::{Cell, FrameBuffer, Tone};
use crate::types::{Attributes3D, EVENT_MARK, LISTENER_MARK};

const RULE: &str = "==================================================";
const TITLE: &str = "Event 3D Example.";
const SUBTITLE: &str = "Top-down view: ^ is the listener, o is the event.";

/// Lines drawn above the grid.
pub const HEADER_LINES: [&str; 4] = [RULE, TITLE, SUBTITLE, RULE];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Key names shown in the control hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHints {
    pub left: &'static str,
    pub right: &'static str,
    pub up: &'static str,
    pub down: &'static str,
    pub quit: &'static str,
}

impl Default for KeyHints {
    fn default() -> Self {
        Self {
            left: "Left",
            right: "Right",
            up: "Up",
            down: "Down",
            quit: "Q",
        }
    }
}

/// Renders the demo screen into a framebuffer.
#[derive(Debug, Clone, Default)]
pub struct DemoView {
    hints: KeyHints,
}

impl DemoView {
    pub fn new(hints: KeyHints) -> Self {
        Self { hints }
    }

    /// Text of the lines drawn below the grid.
    pub fn footer_lines(&self, event: &Attributes3D) -> [String; 3] {
        let h = &self.hints;
        [
            format!(
                "Use the arrow keys ({}, {}, {}, {}) to control the event position",
                h.left, h.right, h.up, h.down
            ),
            format!("Press {} to quit", h.quit),
            format!("Event position: {}", event.position),
        ]
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        grid: &PositionGrid,
        event: &Attributes3D,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let mut y = 0u16;
        for line in HEADER_LINES {
            let tone = if line == TITLE { Tone::Header } else { Tone::Plain };
            fb.put_str(0, y, line, tone);
            y = y.saturating_add(1);
        }

        for row in grid.rows() {
            for (x, &ch) in row.iter().enumerate() {
                fb.set(x as u16, y, Cell::new(ch, tone_for(ch)));
            }
            y = y.saturating_add(1);
        }

        for line in self.footer_lines(event) {
            fb.put_str(0, y, &line, Tone::Hint);
            y = y.saturating_add(1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &PositionGrid,
        event: &Attributes3D,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, event, viewport, &mut fb);
        fb
    }
}

fn tone_for(ch: char) -> Tone {
    match ch {
        LISTENER_MARK => Tone::Listener,
        EVENT_MARK => Tone::Event,
        _ => Tone::Plain,
    }
}
