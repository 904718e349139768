//! Bank catalog - what each bank file provides to the simulated engine.

use crate::types::{DEMO_EVENT_PATH, DEMO_PARAMETER};

/// A continuous event parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDesc {
    pub name: String,
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ParameterDesc {
    pub fn new(name: impl Into<String>, min: f32, max: f32, default: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            name: name.into(),
            min,
            max,
            default: default.clamp(min, max),
        }
    }

    /// Clamp `value` into the parameter range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// An event and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDesc {
    pub path: String,
    pub parameters: Vec<ParameterDesc>,
}

impl EventDesc {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDesc) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDesc> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A bank file.
///
/// A strings bank carries the path table; without one loaded, events cannot
/// be looked up by path.
#[derive(Debug, Clone, PartialEq)]
pub struct BankDesc {
    pub file_name: String,
    pub strings: bool,
    pub events: Vec<EventDesc>,
}

impl BankDesc {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            strings: false,
            events: Vec::new(),
        }
    }

    pub fn strings(file_name: impl Into<String>) -> Self {
        Self {
            strings: true,
            ..Self::new(file_name)
        }
    }

    pub fn with_event(mut self, event: EventDesc) -> Self {
        self.events.push(event);
        self
    }

    pub fn event(&self, path: &str) -> Option<&EventDesc> {
        self.events.iter().find(|e| e.path == path)
    }
}

/// The set of banks an engine can load, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankCatalog {
    banks: Vec<BankDesc>,
}

impl BankCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bank(mut self, bank: BankDesc) -> Self {
        self.banks.retain(|b| b.file_name != bank.file_name);
        self.banks.push(bank);
        self
    }

    pub fn bank(&self, file_name: &str) -> Option<&BankDesc> {
        self.banks.iter().find(|b| b.file_name == file_name)
    }

    pub fn banks(&self) -> &[BankDesc] {
        &self.banks
    }

    /// Master bank, its strings bank, and the vehicles bank with
    /// `/Vehicles/Basic Engine` (parameter `RPM`, 0..=8000).
    pub fn vehicles_demo() -> Self {
        Self::new()
            .with_bank(BankDesc::new("Master Bank.bank"))
            .with_bank(BankDesc::strings("Master Bank.bank.strings"))
            .with_bank(BankDesc::new("Vehicles.bank").with_event(
                EventDesc::new(DEMO_EVENT_PATH)
                    .with_parameter(ParameterDesc::new(DEMO_PARAMETER, 0.0, 8000.0, 0.0)),
            ))
    }
}
