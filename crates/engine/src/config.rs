use std::path::PathBuf;
use std::time::Duration;

use crate::types::{
    DEMO_BANKS, DEMO_EVENT_PATH, DEMO_PARAMETER, DEMO_PARAMETER_VALUE, FRAME_MS, MAX_CHANNELS,
    MOVE_STEP,
};

/// Everything the demo needs to know before it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub media_dir: PathBuf,
    pub banks: Vec<String>,
    pub event_path: String,
    pub parameter: String,
    pub parameter_value: f32,
    pub max_channels: u32,
    pub frame_ms: u32,
    pub step: f32,
    pub log_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("media"),
            banks: DEMO_BANKS.iter().map(|b| b.to_string()).collect(),
            event_path: DEMO_EVENT_PATH.to_string(),
            parameter: DEMO_PARAMETER.to_string(),
            parameter_value: DEMO_PARAMETER_VALUE,
            max_channels: MAX_CHANNELS,
            frame_ms: FRAME_MS,
            step: MOVE_STEP,
            log_path: None,
        }
    }
}

impl DemoConfig {
    /// Create from environment variables; unset or unparseable values keep
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`DemoConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let media_dir = non_empty("EVENT3D_MEDIA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.media_dir);

        let frame_ms = non_empty("EVENT3D_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let step = non_empty("EVENT3D_STEP")
            .and_then(|s| s.parse().ok())
            .filter(|s: &f32| s.is_finite() && *s > 0.0)
            .unwrap_or(defaults.step);

        let parameter_value = non_empty("EVENT3D_RPM")
            .and_then(|s| s.parse().ok())
            .filter(|v: &f32| v.is_finite())
            .unwrap_or(defaults.parameter_value);

        let log_path = non_empty("EVENT3D_LOG_PATH").map(PathBuf::from);

        Self {
            media_dir,
            frame_ms,
            step,
            parameter_value,
            log_path,
            ..defaults
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }

    /// Full paths of the banks to load, in load order.
    pub fn bank_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.banks.iter().map(|b| self.media_dir.join(b))
    }
}
