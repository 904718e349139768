//! Shared value types and constants for the event 3D demo.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the grid, the audio seam, the input mapping, and the terminal view.
//!
//! # Coordinate System
//!
//! Left-handed, y up:
//!
//! - **x**: right
//! - **y**: up (ignored by the top-down grid)
//! - **z**: forward, away from the listener
//!
//! # Screen Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 51 | Grid columns |
//! | `SCREEN_HEIGHT` | 16 | Grid rows |
//! | `FRAME_MS` | 50 | Loop interval |
//! | `MOVE_STEP` | 1.0 | World units per key press |
//!
//! # Examples
//!
//! ```
//! use event3d_types::{Attributes3D, MoveAction, Vector3};
//!
//! let mut attrs = Attributes3D::facing_forward(Vector3::new(0.0, 0.0, 2.0));
//! attrs.position += MoveAction::Left.delta(1.0);
//! assert_eq!(attrs.position, Vector3::new(-1.0, 0.0, 2.0));
//!
//! assert_eq!(MoveAction::from_str("up"), Some(MoveAction::Up));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

/// Grid width in columns.
pub const SCREEN_WIDTH: u16 = 51;

/// Grid height in rows.
pub const SCREEN_HEIGHT: u16 = 16;

/// Fixed loop interval in milliseconds.
pub const FRAME_MS: u32 = 50;

/// Distance the event moves per key press, in world units.
pub const MOVE_STEP: f32 = 1.0;

/// Blank grid cell.
pub const BLANK_MARK: char = ' ';

/// Listener marker, drawn at the grid origin.
pub const LISTENER_MARK: char = '^';

/// Event marker.
pub const EVENT_MARK: char = 'o';

/// Virtual channels requested when the audio runtime is initialized.
pub const MAX_CHANNELS: u32 = 32;

/// Bank files loaded at startup, in load order.
pub const DEMO_BANKS: [&str; 3] = ["Master Bank.bank", "Master Bank.bank.strings", "Vehicles.bank"];

/// Event positioned by the demo.
pub const DEMO_EVENT_PATH: &str = "/Vehicles/Basic Engine";

/// Parameter set on the event instance before it starts.
pub const DEMO_PARAMETER: &str = "RPM";

/// Initial value of [`DEMO_PARAMETER`].
pub const DEMO_PARAMETER_VALUE: f32 = 650.0;

/// Distance in front of the listener where the event starts.
pub const EVENT_START_DISTANCE: f32 = 2.0;

/// A 3D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn is_zero(&self) -> bool {
        self.length_squared() == 0.0
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// Position, velocity and orientation used for spatialization.
///
/// `forward` and `up` must be non-zero; the audio engine rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attributes3D {
    pub position: Vector3,
    pub velocity: Vector3,
    pub forward: Vector3,
    pub up: Vector3,
}

impl Attributes3D {
    /// Attributes at `position`, facing +z with +y up and no velocity.
    pub const fn facing_forward(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::ZERO,
            forward: Vector3::UNIT_Z,
            up: Vector3::UNIT_Y,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.forward.is_finite()
            && self.up.is_finite()
    }
}

impl Default for Attributes3D {
    fn default() -> Self {
        Self::facing_forward(Vector3::ZERO)
    }
}

/// Directional input applied to the event position.
///
/// Up and down move along z (away from / toward the listener), not y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Left,
    Right,
    Up,
    Down,
}

impl MoveAction {
    pub const ALL: [MoveAction; 4] = [
        MoveAction::Left,
        MoveAction::Right,
        MoveAction::Up,
        MoveAction::Down,
    ];

    /// Parse an action name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use event3d_types::MoveAction;
    ///
    /// assert_eq!(MoveAction::from_str("Left"), Some(MoveAction::Left));
    /// assert_eq!(MoveAction::from_str("down"), Some(MoveAction::Down));
    /// assert_eq!(MoveAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(MoveAction::Left),
            "right" => Some(MoveAction::Right),
            "up" => Some(MoveAction::Up),
            "down" => Some(MoveAction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::Left => "left",
            MoveAction::Right => "right",
            MoveAction::Up => "up",
            MoveAction::Down => "down",
        }
    }

    /// World-space offset for one press of this action.
    pub fn delta(&self, step: f32) -> Vector3 {
        match self {
            MoveAction::Left => Vector3::new(-step, 0.0, 0.0),
            MoveAction::Right => Vector3::new(step, 0.0, 0.0),
            MoveAction::Up => Vector3::new(0.0, 0.0, step),
            MoveAction::Down => Vector3::new(0.0, 0.0, -step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_constants() {
        assert_eq!(SCREEN_WIDTH, 51);
        assert_eq!(SCREEN_HEIGHT, 16);
        assert_eq!(FRAME_MS, 50);
        assert_eq!(DEMO_BANKS.len(), 3);
        assert_eq!(DEMO_BANKS[2], "Vehicles.bank");
    }

    #[test]
    fn opposite_moves_cancel() {
        let start = Vector3::new(3.0, 0.5, -2.0);
        let mut p = start;
        p += MoveAction::Left.delta(MOVE_STEP);
        p += MoveAction::Right.delta(MOVE_STEP);
        p += MoveAction::Up.delta(MOVE_STEP);
        p += MoveAction::Down.delta(MOVE_STEP);
        assert_eq!(p, start);
    }

    #[test]
    fn vertical_moves_leave_height_alone() {
        for action in MoveAction::ALL {
            assert_eq!(action.delta(2.0).y, 0.0);
        }
        assert_eq!(MoveAction::Up.delta(2.0), Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn action_names_round_trip() {
        for action in MoveAction::ALL {
            assert_eq!(MoveAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn default_attributes_face_forward() {
        let attrs = Attributes3D::default();
        assert_eq!(attrs.forward, Vector3::UNIT_Z);
        assert_eq!(attrs.up, Vector3::UNIT_Y);
        assert!(attrs.is_finite());

        let bad = Attributes3D::facing_forward(Vector3::new(f32::NAN, 0.0, 0.0));
        assert!(!bad.is_finite());
    }
}
