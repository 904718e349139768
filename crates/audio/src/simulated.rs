//! SimulatedEngine: an in-process stand-in for the audio middleware.
//!
//! It produces no sound. It enforces the call contract the real middleware
//! has (initialize first, load banks once, resolve paths through a strings
//! bank, validate handles, parameters and vectors) and keeps the resulting
//! state around so callers and tests can inspect it.

use std::path::Path;

use tracing::{debug, info, trace};

use crate::catalog::{BankCatalog, EventDesc};
use crate::engine::{AudioEngine, BankHandle, EventDescription, EventId, InstanceHandle};
use crate::error::{AudioError, Result};
use crate::types::Attributes3D;

/// Playback state of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

/// Everything the engine knows about one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceState {
    pub event: EventId,
    pub state: PlaybackState,
    pub parameters: Vec<(String, f32)>,
    pub attributes: Attributes3D,
}

impl InstanceState {
    pub fn parameter(&self, name: &str) -> Option<f32> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }
}

#[derive(Debug, Clone)]
struct LoadedBank {
    /// Index into the catalog.
    catalog_index: usize,
}

#[derive(Debug, Clone)]
struct ResolvedEvent {
    path: String,
    /// Index of the owning bank in the catalog.
    bank: usize,
    loaded: bool,
}

pub struct SimulatedEngine {
    catalog: BankCatalog,
    initialized: bool,
    max_channels: u32,
    banks: Vec<LoadedBank>,
    events: Vec<ResolvedEvent>,
    instances: Vec<InstanceState>,
    listener: Attributes3D,
    frame: u64,
}

impl SimulatedEngine {
    pub fn new(catalog: BankCatalog) -> Self {
        Self {
            catalog,
            initialized: false,
            max_channels: 0,
            banks: Vec::new(),
            events: Vec::new(),
            instances: Vec::new(),
            listener: Attributes3D::default(),
            frame: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn max_channels(&self) -> u32 {
        self.max_channels
    }

    /// Number of completed `update` calls.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn listener(&self) -> &Attributes3D {
        &self.listener
    }

    /// File names of loaded banks, in load order.
    pub fn loaded_banks(&self) -> impl Iterator<Item = &str> {
        self.banks
            .iter()
            .map(|b| self.catalog.banks()[b.catalog_index].file_name.as_str())
    }

    pub fn instance(&self, handle: InstanceHandle) -> Option<&InstanceState> {
        self.instances.get(handle.0 as usize)
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(AudioError::NotInitialized)
        }
    }

    fn is_bank_loaded(&self, catalog_index: usize) -> bool {
        self.banks.iter().any(|b| b.catalog_index == catalog_index)
    }

    fn event_desc(&self, id: EventId) -> Result<&EventDesc> {
        let resolved = self
            .events
            .get(id.0 as usize)
            .ok_or(AudioError::InvalidHandle { kind: "event", id: id.0 })?;
        self.catalog.banks()[resolved.bank]
            .event(&resolved.path)
            .ok_or_else(|| AudioError::EventNotFound(resolved.path.clone()))
    }

    fn instance_mut(&mut self, handle: InstanceHandle) -> Result<&mut InstanceState> {
        self.instances.get_mut(handle.0 as usize).ok_or(AudioError::InvalidHandle {
            kind: "instance",
            id: handle.0,
        })
    }
}

fn validate_attributes(attributes: &Attributes3D) -> Result<()> {
    if !attributes.is_finite() {
        return Err(AudioError::InvalidAttributes("vectors must be finite"));
    }
    if attributes.forward.is_zero() {
        return Err(AudioError::InvalidAttributes("forward vector is zero"));
    }
    if attributes.up.is_zero() {
        return Err(AudioError::InvalidAttributes("up vector is zero"));
    }
    Ok(())
}

impl AudioEngine for SimulatedEngine {
    fn initialize(&mut self, max_channels: u32) -> Result<()> {
        if self.initialized {
            return Err(AudioError::AlreadyInitialized);
        }
        self.initialized = true;
        self.max_channels = max_channels;
        info!(max_channels, "audio runtime initialized");
        Ok(())
    }

    fn load_bank(&mut self, path: &Path) -> Result<BankHandle> {
        self.ensure_initialized()?;

        let display = path.display().to_string();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AudioError::BankNotFound(display.clone()))?;
        let catalog_index = self
            .catalog
            .banks()
            .iter()
            .position(|b| b.file_name == file_name)
            .ok_or_else(|| AudioError::BankNotFound(display.clone()))?;

        if self.is_bank_loaded(catalog_index) {
            return Err(AudioError::BankAlreadyLoaded(display));
        }

        self.banks.push(LoadedBank { catalog_index });
        let handle = BankHandle((self.banks.len() - 1) as u32);
        info!(bank = %path.display(), handle = handle.0, "bank loaded");
        Ok(handle)
    }

    fn lookup_event(&mut self, path: &str) -> Result<EventId> {
        self.ensure_initialized()?;

        let strings_loaded = self
            .banks
            .iter()
            .any(|b| self.catalog.banks()[b.catalog_index].strings);
        if !strings_loaded {
            return Err(AudioError::NoStringsBank(path.to_string()));
        }

        if let Some(existing) = self.events.iter().position(|e| e.path == path) {
            return Ok(EventId(existing as u32));
        }

        let bank = self
            .banks
            .iter()
            .map(|b| b.catalog_index)
            .find(|&i| self.catalog.banks()[i].event(path).is_some())
            .ok_or_else(|| AudioError::EventNotFound(path.to_string()))?;

        self.events.push(ResolvedEvent {
            path: path.to_string(),
            bank,
            loaded: false,
        });
        let id = EventId((self.events.len() - 1) as u32);
        debug!(event = path, id = id.0, "event resolved");
        Ok(id)
    }

    fn event_description(&mut self, id: EventId) -> Result<EventDescription> {
        self.ensure_initialized()?;
        let path = self.event_desc(id)?.path.clone();
        if let Some(resolved) = self.events.get_mut(id.0 as usize) {
            resolved.loaded = true;
        }
        Ok(EventDescription { id, path })
    }

    fn create_instance(&mut self, description: &EventDescription) -> Result<InstanceHandle> {
        self.ensure_initialized()?;

        let loaded = self
            .events
            .get(description.id.0 as usize)
            .filter(|e| e.path == description.path)
            .map(|e| e.loaded)
            .ok_or(AudioError::InvalidHandle {
                kind: "event description",
                id: description.id.0,
            })?;
        if !loaded {
            return Err(AudioError::InvalidHandle {
                kind: "event description",
                id: description.id.0,
            });
        }

        let parameters = self
            .event_desc(description.id)?
            .parameters
            .iter()
            .map(|p| (p.name.clone(), p.default))
            .collect();

        self.instances.push(InstanceState {
            event: description.id,
            state: PlaybackState::Stopped,
            parameters,
            attributes: Attributes3D::default(),
        });
        let handle = InstanceHandle((self.instances.len() - 1) as u32);
        debug!(event = %description, instance = handle.0, "instance created");
        Ok(handle)
    }

    fn set_parameter(&mut self, instance: InstanceHandle, name: &str, value: f32) -> Result<()> {
        self.ensure_initialized()?;

        let event = self
            .instances
            .get(instance.0 as usize)
            .map(|i| i.event)
            .ok_or(AudioError::InvalidHandle {
                kind: "instance",
                id: instance.0,
            })?;
        let desc = self.event_desc(event)?;
        let param = desc
            .parameter(name)
            .ok_or_else(|| AudioError::ParameterNotFound {
                event: desc.path.clone(),
                name: name.to_string(),
            })?;
        if !value.is_finite() {
            return Err(AudioError::InvalidParameterValue {
                name: name.to_string(),
                value,
            });
        }
        let clamped = param.clamp(value);

        let state = self.instance_mut(instance)?;
        if let Some(slot) = state.parameters.iter_mut().find(|(n, _)| n == name) {
            slot.1 = clamped;
        }
        debug!(instance = instance.0, parameter = name, value = clamped, "parameter set");
        Ok(())
    }

    fn start(&mut self, instance: InstanceHandle) -> Result<()> {
        self.ensure_initialized()?;
        let state = self.instance_mut(instance)?;
        state.state = PlaybackState::Playing;
        info!(instance = instance.0, "instance started");
        Ok(())
    }

    fn set_listener_attributes(&mut self, attributes: &Attributes3D) -> Result<()> {
        self.ensure_initialized()?;
        validate_attributes(attributes)?;
        self.listener = *attributes;
        debug!(position = %attributes.position, "listener moved");
        Ok(())
    }

    fn set_3d_attributes(
        &mut self,
        instance: InstanceHandle,
        attributes: &Attributes3D,
    ) -> Result<()> {
        self.ensure_initialized()?;
        validate_attributes(attributes)?;
        let state = self.instance_mut(instance)?;
        state.attributes = *attributes;
        debug!(instance = instance.0, position = %attributes.position, "event moved");
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.frame += 1;
        trace!(frame = self.frame, "audio update");
        Ok(())
    }

    fn release(self) -> Result<()> {
        info!(
            frames = self.frame,
            instances = self.instances.len(),
            "audio runtime released"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vector3, DEMO_EVENT_PATH, DEMO_PARAMETER};

    fn ready_engine() -> SimulatedEngine {
        let mut engine = SimulatedEngine::new(BankCatalog::vehicles_demo());
        engine.initialize(32).unwrap();
        engine.load_bank(Path::new("media/Master Bank.bank")).unwrap();
        engine
            .load_bank(Path::new("media/Master Bank.bank.strings"))
            .unwrap();
        engine.load_bank(Path::new("media/Vehicles.bank")).unwrap();
        engine
    }

    fn demo_instance(engine: &mut SimulatedEngine) -> InstanceHandle {
        let id = engine.lookup_event(DEMO_EVENT_PATH).unwrap();
        let desc = engine.event_description(id).unwrap();
        engine.create_instance(&desc).unwrap()
    }

    #[test]
    fn calls_before_initialize_fail() {
        let mut engine = SimulatedEngine::new(BankCatalog::vehicles_demo());
        assert_eq!(
            engine.load_bank(Path::new("Vehicles.bank")),
            Err(AudioError::NotInitialized)
        );
        assert_eq!(engine.update(), Err(AudioError::NotInitialized));
    }

    #[test]
    fn initialize_twice_fails() {
        let mut engine = SimulatedEngine::new(BankCatalog::new());
        engine.initialize(32).unwrap();
        assert_eq!(engine.initialize(32), Err(AudioError::AlreadyInitialized));
        assert_eq!(engine.max_channels(), 32);
    }

    #[test]
    fn banks_load_once_in_order() {
        let mut engine = ready_engine();
        let names: Vec<&str> = engine.loaded_banks().collect();
        assert_eq!(
            names,
            vec!["Master Bank.bank", "Master Bank.bank.strings", "Vehicles.bank"]
        );
        assert!(matches!(
            engine.load_bank(Path::new("Vehicles.bank")),
            Err(AudioError::BankAlreadyLoaded(_))
        ));
        assert!(matches!(
            engine.load_bank(Path::new("media/Weapons.bank")),
            Err(AudioError::BankNotFound(_))
        ));
    }

    #[test]
    fn lookup_needs_strings_bank() {
        let mut engine = SimulatedEngine::new(BankCatalog::vehicles_demo());
        engine.initialize(32).unwrap();
        engine.load_bank(Path::new("Vehicles.bank")).unwrap();
        assert!(matches!(
            engine.lookup_event(DEMO_EVENT_PATH),
            Err(AudioError::NoStringsBank(_))
        ));

        engine.load_bank(Path::new("Master Bank.bank.strings")).unwrap();
        assert_eq!(engine.lookup_event(DEMO_EVENT_PATH), Ok(EventId(0)));
        // Same path resolves to the same id.
        assert_eq!(engine.lookup_event(DEMO_EVENT_PATH), Ok(EventId(0)));
    }

    #[test]
    fn unknown_event_fails() {
        let mut engine = ready_engine();
        assert!(matches!(
            engine.lookup_event("/Vehicles/Jet Engine"),
            Err(AudioError::EventNotFound(_))
        ));
    }

    #[test]
    fn instance_needs_loaded_description() {
        let mut engine = ready_engine();
        let id = engine.lookup_event(DEMO_EVENT_PATH).unwrap();
        let forged = EventDescription {
            id,
            path: DEMO_EVENT_PATH.to_string(),
        };
        assert!(matches!(
            engine.create_instance(&forged),
            Err(AudioError::InvalidHandle { .. })
        ));

        let desc = engine.event_description(id).unwrap();
        let handle = engine.create_instance(&desc).unwrap();
        let state = engine.instance(handle).unwrap();
        assert_eq!(state.state, PlaybackState::Stopped);
        assert_eq!(state.parameter(DEMO_PARAMETER), Some(0.0));
    }

    #[test]
    fn parameters_are_validated_and_clamped() {
        let mut engine = ready_engine();
        let handle = demo_instance(&mut engine);

        engine.set_parameter(handle, DEMO_PARAMETER, 650.0).unwrap();
        assert_eq!(engine.instance(handle).unwrap().parameter(DEMO_PARAMETER), Some(650.0));

        engine.set_parameter(handle, DEMO_PARAMETER, 1.0e6).unwrap();
        assert_eq!(engine.instance(handle).unwrap().parameter(DEMO_PARAMETER), Some(8000.0));

        assert!(matches!(
            engine.set_parameter(handle, "Gear", 2.0),
            Err(AudioError::ParameterNotFound { .. })
        ));
        assert!(matches!(
            engine.set_parameter(handle, DEMO_PARAMETER, f32::NAN),
            Err(AudioError::InvalidParameterValue { .. })
        ));
        assert!(matches!(
            engine.set_parameter(InstanceHandle(9), DEMO_PARAMETER, 1.0),
            Err(AudioError::InvalidHandle { .. })
        ));
    }

    #[test]
    fn attributes_are_validated() {
        let mut engine = ready_engine();
        let handle = demo_instance(&mut engine);

        let good = Attributes3D::facing_forward(Vector3::new(1.0, 0.0, 2.0));
        engine.set_3d_attributes(handle, &good).unwrap();
        assert_eq!(engine.instance(handle).unwrap().attributes, good);

        let mut no_forward = good;
        no_forward.forward = Vector3::ZERO;
        assert!(matches!(
            engine.set_3d_attributes(handle, &no_forward),
            Err(AudioError::InvalidAttributes(_))
        ));

        let mut no_up = good;
        no_up.up = Vector3::ZERO;
        assert!(engine.set_listener_attributes(&no_up).is_err());

        let nan = Attributes3D::facing_forward(Vector3::new(f32::NAN, 0.0, 0.0));
        assert!(engine.set_listener_attributes(&nan).is_err());
        assert_eq!(*engine.listener(), Attributes3D::default());
    }

    #[test]
    fn start_and_update() {
        let mut engine = ready_engine();
        let handle = demo_instance(&mut engine);
        engine.start(handle).unwrap();
        assert_eq!(engine.instance(handle).unwrap().state, PlaybackState::Playing);

        engine.update().unwrap();
        engine.update().unwrap();
        assert_eq!(engine.frame(), 2);
        engine.release().unwrap();
    }
}
