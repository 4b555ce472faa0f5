//! Turn configuration.
//!
//! Every field has a default matching the stock table page, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::player::DEFAULT_FRAME_INTERVAL_MS;
use crate::shot::DEFAULT_SHOT_SCALE;

/// Stroke attributes of the aiming indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    /// Element id, used to find and remove a stale indicator.
    pub id: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            id: "stick".to_string(),
            stroke: "black".to_string(),
            stroke_width: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConfig {
    /// Multiplier from pull-back distance to shot velocity.
    pub shot_scale: f64,
    /// Playback cadence in milliseconds.
    pub frame_interval_ms: u32,
    /// Shot-submission endpoint.
    pub shoot_url: String,
    /// Id of the element containing the table SVG.
    pub container_id: String,
    /// `fill` attribute identifying the cue ball circle.
    pub cue_ball_fill: String,
    pub indicator: IndicatorStyle,
    /// `EnvFilter` directive for the client's log output.
    pub log_filter: String,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            shot_scale: DEFAULT_SHOT_SCALE,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            shoot_url: "/shoot".to_string(),
            container_id: "table".to_string(),
            cue_ball_fill: "WHITE".to_string(),
            indicator: IndicatorStyle::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl TurnConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// CSS selector for the cue ball inside the container.
    pub fn cue_ball_selector(&self) -> String {
        format!("circle[fill=\"{}\"]", self.cue_ball_fill)
    }
}
