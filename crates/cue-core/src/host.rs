//! Scene host interface.
//!
//! The browser implementation lives in `cue-client`; tests use
//! `test_utils::RecordingHost`.

use crate::config::IndicatorStyle;
use crate::error::SetupError;
use crate::shot::{SceneAnchor, ScenePoint};
use crate::transform::ScreenMatrix;

/// Anything playback can render a frame into.
pub trait FrameSink {
    /// Replace the scene's visible content wholesale with `payload`.
    fn replace_content(&mut self, payload: &str);
}

/// Everything the turn state machine needs from the rendered scene.
pub trait SceneHost: FrameSink {
    /// Locate the cue ball and read its center.
    fn cue_ball_center(&self) -> Result<SceneAnchor, SetupError>;

    /// Current screen-to-local transform, or `None` when not rendered.
    fn screen_matrix(&self) -> Option<ScreenMatrix>;

    /// Create the aiming indicator with both endpoints at `anchor`, hidden.
    fn attach_indicator(&mut self, anchor: SceneAnchor, style: &IndicatorStyle);

    fn remove_indicator(&mut self);

    fn has_indicator(&self) -> bool;

    /// Move the indicator's far endpoint.
    fn set_indicator_end(&mut self, end: ScenePoint);

    fn set_indicator_visible(&mut self, visible: bool);
}
