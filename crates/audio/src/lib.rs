//! Audio middleware seam.
//!
//! The demo never talks to a concrete audio library directly. It drives an
//! [`AudioEngine`], which exposes the handful of event-system calls the demo
//! needs: initialize, load banks, resolve an event, create and start an
//! instance, set a parameter, position the listener and the instance, advance
//! the runtime clock, and release.
//!
//! [`SimulatedEngine`] implements the trait in-process against a
//! [`BankCatalog`]. It validates every call the way the middleware would and
//! records the resulting state, but does no mixing or spatialization.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use event3d_audio::{AudioEngine, BankCatalog, SimulatedEngine};
//!
//! let mut engine = SimulatedEngine::new(BankCatalog::vehicles_demo());
//! engine.initialize(32).unwrap();
//! engine.load_bank(Path::new("Master Bank.bank.strings")).unwrap();
//! engine.load_bank(Path::new("Vehicles.bank")).unwrap();
//!
//! let id = engine.lookup_event("/Vehicles/Basic Engine").unwrap();
//! let description = engine.event_description(id).unwrap();
//! let instance = engine.create_instance(&description).unwrap();
//! engine.set_parameter(instance, "RPM", 650.0).unwrap();
//! engine.start(instance).unwrap();
//! engine.update().unwrap();
//! engine.release().unwrap();
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod simulated;

pub use event3d_types as types;

pub use catalog::{BankCatalog, BankDesc, EventDesc, ParameterDesc};
pub use engine::{AudioEngine, BankHandle, EventDescription, EventId, InstanceHandle};
pub use error::{AudioError, Result};
pub use simulated::{InstanceState, PlaybackState, SimulatedEngine};
