//! Error types.

use thiserror::Error;

/// A failed call into the audio middleware.
///
/// Every variant is fatal for the demo; the message is the diagnostic shown
/// on exit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("audio runtime is not initialized")]
    NotInitialized,

    #[error("audio runtime is already initialized")]
    AlreadyInitialized,

    #[error("bank file not found: {0}")]
    BankNotFound(String),

    #[error("bank already loaded: {0}")]
    BankAlreadyLoaded(String),

    #[error("event path lookup needs a loaded strings bank: {0}")]
    NoStringsBank(String),

    #[error("event not found: {0}")]
    EventNotFound(String),

    #[error("invalid {kind} handle: {id}")]
    InvalidHandle { kind: &'static str, id: u32 },

    #[error("parameter {name:?} not found on {event}")]
    ParameterNotFound { event: String, name: String },

    #[error("invalid value {value} for parameter {name:?}")]
    InvalidParameterValue { name: String, value: f32 },

    #[error("invalid 3D attributes: {0}")]
    InvalidAttributes(&'static str),
}

/// Result type.
pub type Result<T> = std::result::Result<T, AudioError>;
