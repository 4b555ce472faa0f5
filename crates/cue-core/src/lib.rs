//! Cue-Live Core Library
//!
//! Host-independent turn logic for the billiards client: the aim/shoot/
//! animate state machine, pointer-to-scene coordinate conversion and frame
//! playback. The browser bindings live in `cue-client`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod frames;
pub mod host;
pub mod player;
pub mod shot;
pub mod transform;
pub mod turn;

#[cfg(test)]
mod test_utils;

pub use config::{IndicatorStyle, TurnConfig};
pub use error::{FrameFormatError, SetupError, SubmissionError, TransformError};
pub use frames::FrameSequence;
pub use host::{FrameSink, SceneHost};
pub use player::{FramePlayer, PlaybackId, PlaybackStep};
pub use shot::{AimVector, DevicePoint, SceneAnchor, ScenePoint, ShotVelocity};
pub use transform::{ScreenMatrix, to_scene_local};
pub use turn::{TurnAction, TurnController, TurnState};
