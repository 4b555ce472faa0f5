//! Frame sequences returned by the simulator.
//!
//! Two wire forms decode to the same `FrameSequence`:
//! - legacy: every frame joined by `,` in a single `text/plain` body
//! - structured: `{"frames": [...]}` as `application/json`

use serde::{Deserialize, Serialize};

use crate::error::FrameFormatError;

/// Separator used by the legacy wire format.
pub const FRAME_DELIMITER: &str = ",";

/// Ordered, immutable list of serialized scene snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSequence {
    frames: Vec<String>,
}

impl FrameSequence {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    /// Split a legacy delimited body.
    ///
    /// Matches a plain string split: an empty body yields one empty frame,
    /// and empty segments are kept.
    pub fn from_delimited(body: &str) -> Self {
        Self {
            frames: body.split(FRAME_DELIMITER).map(str::to_owned).collect(),
        }
    }

    pub fn to_delimited(&self) -> String {
        self.frames.join(FRAME_DELIMITER)
    }

    /// Decode the structured JSON schema.
    pub fn from_json(body: &str) -> Result<Self, FrameFormatError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> String {
        // A struct of strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(String::as_str)
    }

    /// Indices that playback renders.
    ///
    /// The first frame is the pre-shot table and the last is never shown,
    /// so this is `1..len-1`, empty for sequences shorter than three.
    pub fn playable_range(&self) -> std::ops::Range<usize> {
        1..self.frames.len().saturating_sub(1).max(1)
    }

    pub fn has_playable_frames(&self) -> bool {
        !self.playable_range().is_empty()
    }
}
