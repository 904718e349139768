//! The seam between the demo and the audio middleware.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::types::Attributes3D;

/// A loaded bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BankHandle(pub u32);

/// A resolved event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub u32);

/// A live event instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceHandle(pub u32);

/// Loaded description of an event, used to create instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescription {
    pub id: EventId,
    pub path: String,
}

impl fmt::Display for EventDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Operations the demo needs from an event-based audio middleware.
///
/// Creating the runtime is the implementor's constructor; everything after
/// that goes through this trait so the loop can run against any backend.
pub trait AudioEngine {
    /// Initialize the runtime. Must be called exactly once, before anything else.
    fn initialize(&mut self, max_channels: u32) -> Result<()>;

    /// Load a bank file. Each bank can only be loaded once.
    fn load_bank(&mut self, path: &Path) -> Result<BankHandle>;

    /// Resolve an event path (e.g. `/Vehicles/Basic Engine`) to its id.
    fn lookup_event(&mut self, path: &str) -> Result<EventId>;

    /// Load the description for a resolved event.
    fn event_description(&mut self, id: EventId) -> Result<EventDescription>;

    fn create_instance(&mut self, description: &EventDescription) -> Result<InstanceHandle>;

    /// Set a named parameter on an instance.
    fn set_parameter(&mut self, instance: InstanceHandle, name: &str, value: f32) -> Result<()>;

    fn start(&mut self, instance: InstanceHandle) -> Result<()>;

    fn set_listener_attributes(&mut self, attributes: &Attributes3D) -> Result<()>;

    fn set_3d_attributes(
        &mut self,
        instance: InstanceHandle,
        attributes: &Attributes3D,
    ) -> Result<()>;

    /// Advance the runtime by one frame. Call once per loop iteration.
    fn update(&mut self) -> Result<()>;

    /// Shut the runtime down.
    fn release(self) -> Result<()>
    where
        Self: Sized;
}
