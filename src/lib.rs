//! Event 3D demo (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `event3d::{audio,core,engine,input,term,types}`.

pub use event3d_audio as audio;
pub use event3d_core as core;
pub use event3d_engine as engine;
pub use event3d_input as input;
pub use event3d_term as term;
pub use event3d_types as types;
