//! In-memory scene host for state machine tests.

use crate::config::IndicatorStyle;
use crate::error::SetupError;
use crate::host::{FrameSink, SceneHost};
use crate::shot::{SceneAnchor, ScenePoint};
use crate::transform::ScreenMatrix;

/// One call made against the host, in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    Attach(SceneAnchor),
    Remove,
    SetEnd(ScenePoint),
    SetVisible(bool),
    Replace(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Indicator {
    pub start: ScenePoint,
    pub end: ScenePoint,
    pub visible: bool,
    pub stroke: String,
    pub stroke_width: f64,
}

/// Records every host call and models the indicator the way the DOM does:
/// replacing the content also removes the indicator.
pub(crate) struct RecordingHost {
    pub cue_ball: Result<SceneAnchor, SetupError>,
    pub matrix: Option<ScreenMatrix>,
    pub indicator: Option<Indicator>,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    /// Cue ball at `(x, y)` with an identity screen transform.
    pub fn with_cue_ball(x: f64, y: f64) -> Self {
        Self {
            cue_ball: Ok(SceneAnchor::new(x, y)),
            matrix: Some(ScreenMatrix::IDENTITY),
            indicator: None,
            calls: Vec::new(),
        }
    }

    pub fn rendered(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Replace(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn end_updates(&self) -> Vec<ScenePoint> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SetEnd(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn indicator_visible(&self) -> bool {
        self.indicator.as_ref().is_some_and(|i| i.visible)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl FrameSink for RecordingHost {
    fn replace_content(&mut self, payload: &str) {
        self.indicator = None;
        self.calls.push(HostCall::Replace(payload.to_string()));
    }
}

impl SceneHost for RecordingHost {
    fn cue_ball_center(&self) -> Result<SceneAnchor, SetupError> {
        self.cue_ball.clone()
    }

    fn screen_matrix(&self) -> Option<ScreenMatrix> {
        self.matrix
    }

    fn attach_indicator(&mut self, anchor: SceneAnchor, style: &IndicatorStyle) {
        self.indicator = Some(Indicator {
            start: anchor.as_point(),
            end: anchor.as_point(),
            visible: false,
            stroke: style.stroke.clone(),
            stroke_width: style.stroke_width,
        });
        self.calls.push(HostCall::Attach(anchor));
    }

    fn remove_indicator(&mut self) {
        self.indicator = None;
        self.calls.push(HostCall::Remove);
    }

    fn has_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    fn set_indicator_end(&mut self, end: ScenePoint) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.end = end;
        }
        self.calls.push(HostCall::SetEnd(end));
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.visible = visible;
        }
        self.calls.push(HostCall::SetVisible(visible));
    }
}
