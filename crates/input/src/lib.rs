//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MoveAction`]s and a quit
//! request, and drains everything pending for a frame into an [`InputBatch`].
//! Nothing here knows about the grid or the audio engine.

pub mod batch;
pub mod map;

pub use event3d_types as types;

pub use batch::{poll_input, InputBatch, MAX_ACTIONS_PER_FRAME};
pub use map::{handle_key_event, key_label, should_quit};
