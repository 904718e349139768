//! Session - one run of the demo against an audio engine.
//!
//! Lifecycle: [`Session::start`] runs the whole setup sequence and fails on
//! the first middleware error; [`Session::apply`] and [`Session::frame`] run
//! every loop iteration; [`Session::shutdown`] releases the engine.

use anyhow::{Context, Result};
use tracing::{debug, info, trace};

use crate::audio::{AudioEngine, InstanceHandle};
use crate::config::DemoConfig;
use crate::core::PositionGrid;
use crate::types::{Attributes3D, MoveAction, Vector3, EVENT_START_DISTANCE};

pub struct Session<A: AudioEngine> {
    engine: A,
    instance: InstanceHandle,
    listener: Attributes3D,
    event: Attributes3D,
    step: f32,
    grid: PositionGrid,
}

impl<A: AudioEngine> Session<A> {
    /// Initialize the engine, load the banks, start the event and place it
    /// in front of the listener.
    pub fn start(mut engine: A, config: &DemoConfig) -> Result<Self> {
        engine
            .initialize(config.max_channels)
            .context("initialize audio runtime")?;

        for path in config.bank_paths() {
            engine
                .load_bank(&path)
                .with_context(|| format!("load bank {}", path.display()))?;
        }

        let id = engine
            .lookup_event(&config.event_path)
            .with_context(|| format!("look up event {}", config.event_path))?;
        let description = engine
            .event_description(id)
            .with_context(|| format!("load event {}", config.event_path))?;
        let instance = engine
            .create_instance(&description)
            .with_context(|| format!("create instance of {}", description))?;

        engine
            .set_parameter(instance, &config.parameter, config.parameter_value)
            .with_context(|| format!("set parameter {}", config.parameter))?;
        engine.start(instance).context("start event instance")?;

        let listener = Attributes3D::default();
        engine
            .set_listener_attributes(&listener)
            .context("set listener attributes")?;

        let event = Attributes3D::facing_forward(Vector3::new(0.0, 0.0, EVENT_START_DISTANCE));
        engine
            .set_3d_attributes(instance, &event)
            .context("set event 3D attributes")?;

        let mut grid = PositionGrid::new();
        grid.initialize();

        info!(event = %description, position = %event.position, "session started");
        Ok(Self {
            engine,
            instance,
            listener,
            event,
            step: config.step,
            grid,
        })
    }

    /// Move the event one step and push its new attributes to the engine.
    pub fn apply(&mut self, action: MoveAction) -> Result<()> {
        self.event.position += action.delta(self.step);
        debug!(action = action.as_str(), position = %self.event.position, "event moved");
        self.engine
            .set_3d_attributes(self.instance, &self.event)
            .context("set event 3D attributes")?;
        Ok(())
    }

    /// Advance the engine clock and redraw the grid.
    pub fn frame(&mut self) -> Result<()> {
        self.engine.update().context("update audio runtime")?;
        self.grid.update(self.event.position);
        trace!(cursor = ?self.grid.cursor(), "frame");
        Ok(())
    }

    /// Release the engine.
    pub fn shutdown(self) -> Result<()> {
        self.engine.release().context("release audio runtime")?;
        info!("session shut down");
        Ok(())
    }

    pub fn grid(&self) -> &PositionGrid {
        &self.grid
    }

    pub fn event(&self) -> &Attributes3D {
        &self.event
    }

    pub fn listener(&self) -> &Attributes3D {
        &self.listener
    }

    pub fn instance(&self) -> InstanceHandle {
        self.instance
    }

    pub fn engine(&self) -> &A {
        &self.engine
    }
}
