//! Terminal display for the demo.
//!
//! Screens are laid out into a framebuffer by [`DemoView`] (pure, testable)
//! and flushed by [`TerminalRenderer`], which diffs against the previous
//! frame so only changed cells hit the terminal.

pub mod demo_view;
pub mod fb;
pub mod renderer;

pub use event3d_core as core;
pub use event3d_types as types;

pub use demo_view::{DemoView, KeyHints, Viewport, HEADER_LINES};
pub use fb::{Cell, FrameBuffer, Tone};
pub use renderer::{changed_runs, encode_frame_into, TerminalRenderer};
