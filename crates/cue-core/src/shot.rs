//! Aiming geometry: the cue ball anchor, the drag endpoint and the shot
//! velocity derived from them.

use serde::{Deserialize, Serialize};

/// Velocity multiplier applied to the pull-back distance.
pub const DEFAULT_SHOT_SCALE: f64 = 10.0;

/// A point in device (viewport / client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in the scene's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The cue ball's center, captured once per turn at setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneAnchor {
    pub center_x: f64,
    pub center_y: f64,
}

impl SceneAnchor {
    pub fn new(center_x: f64, center_y: f64) -> Self {
        Self { center_x, center_y }
    }

    pub fn as_point(&self) -> ScenePoint {
        ScenePoint::new(self.center_x, self.center_y)
    }
}

/// Current far endpoint of the aiming indicator while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimVector {
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl From<ScenePoint> for AimVector {
    fn from(p: ScenePoint) -> Self {
        Self {
            pointer_x: p.x,
            pointer_y: p.y,
        }
    }
}

impl AimVector {
    pub fn as_point(&self) -> ScenePoint {
        ScenePoint::new(self.pointer_x, self.pointer_y)
    }
}

/// Velocity handed to the simulator.
///
/// Direction is reversed relative to the drag, so pulling back from the
/// ball and releasing shoots forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotVelocity {
    #[serde(rename = "velX")]
    pub vel_x: f64,
    #[serde(rename = "velY")]
    pub vel_y: f64,
}

impl ShotVelocity {
    /// `(anchor - release) * scale`, component-wise.
    pub fn from_release(anchor: SceneAnchor, release: AimVector, scale: f64) -> Self {
        Self {
            vel_x: (anchor.center_x - release.pointer_x) * scale,
            vel_y: (anchor.center_y - release.pointer_y) * scale,
        }
    }
}
