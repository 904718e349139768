//! Demo session: the setup, per-frame work and teardown of the event 3D demo.
//!
//! A [`Session`] owns the audio engine, the event instance and the
//! [`PositionGrid`](event3d_core::PositionGrid). The binary only polls input,
//! calls into the session, draws, and sleeps; everything else is testable
//! against [`SimulatedEngine`](event3d_audio::SimulatedEngine).
//!
//! # Environment Variables
//!
//! - `EVENT3D_MEDIA_DIR`: directory holding the bank files (default: "media")
//! - `EVENT3D_FRAME_MS`: loop interval in milliseconds (default: 50)
//! - `EVENT3D_STEP`: world units moved per key press (default: 1.0)
//! - `EVENT3D_RPM`: initial value of the `RPM` parameter (default: 650)
//! - `EVENT3D_LOG_PATH`: write logs to this file (default: logging off)

pub mod config;
pub mod session;

pub use event3d_audio as audio;
pub use event3d_core as core;
pub use event3d_types as types;

pub use config::DemoConfig;
pub use session::Session;
