//! SVG scene host backed by the page DOM.

use cue_core::config::{IndicatorStyle, TurnConfig};
use cue_core::{FrameSink, SceneAnchor, SceneHost, ScenePoint, ScreenMatrix, SetupError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, SvgGraphicsElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        tracing::warn!(name, error = ?e, "Failed to set attribute");
    }
}

/// The `#table` container and the cue stick line drawn inside it.
pub struct SvgScene {
    document: Document,
    container: Element,
    cue_ball_selector: String,
    indicator_id: String,
    indicator: Option<Element>,
}

impl SvgScene {
    pub fn new(document: Document, container: Element, config: &TurnConfig) -> Self {
        Self {
            document,
            container,
            cue_ball_selector: config.cue_ball_selector(),
            indicator_id: config.indicator.id.clone(),
            indicator: None,
        }
    }

    pub fn cue_ball_selector(&self) -> &str {
        &self.cue_ball_selector
    }

    fn svg_root(&self) -> Option<Element> {
        self.container.query_selector("svg").ok().flatten()
    }

    fn connected_indicator(&self) -> Option<&Element> {
        self.indicator.as_ref().filter(|el| el.is_connected())
    }
}

impl FrameSink for SvgScene {
    fn replace_content(&mut self, payload: &str) {
        self.container.set_inner_html(payload);
    }
}

impl SceneHost for SvgScene {
    fn cue_ball_center(&self) -> Result<SceneAnchor, SetupError> {
        let ball = self
            .container
            .query_selector(&self.cue_ball_selector)
            .ok()
            .flatten()
            .ok_or(SetupError::CueBallNotFound)?;

        let read = |name: &str| -> Result<f64, SetupError> {
            let raw = ball
                .get_attribute(name)
                .ok_or_else(|| SetupError::InvalidCueBall(format!("missing {name}")))?;
            raw.trim()
                .parse::<f64>()
                .map_err(|e| SetupError::InvalidCueBall(format!("{name}={raw:?}: {e}")))
        };

        Ok(SceneAnchor::new(read("cx")?, read("cy")?))
    }

    fn screen_matrix(&self) -> Option<ScreenMatrix> {
        let target = self.connected_indicator().cloned().or_else(|| self.svg_root())?;
        let graphics = target.dyn_into::<SvgGraphicsElement>().ok()?;
        let m = graphics.get_screen_ctm()?;
        Some(ScreenMatrix::new(
            f64::from(m.a()),
            f64::from(m.b()),
            f64::from(m.c()),
            f64::from(m.d()),
            f64::from(m.e()),
            f64::from(m.f()),
        ))
    }

    fn attach_indicator(&mut self, anchor: SceneAnchor, style: &IndicatorStyle) {
        let Some(svg) = self.svg_root() else {
            tracing::warn!("No <svg> in scene container; cue stick not attached");
            return;
        };
        let line = match self.document.create_element_ns(Some(SVG_NS), "line") {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to create cue stick");
                return;
            }
        };

        let x = anchor.center_x.to_string();
        let y = anchor.center_y.to_string();
        set_attr(&line, "id", &style.id);
        set_attr(&line, "x1", &x);
        set_attr(&line, "y1", &y);
        set_attr(&line, "x2", &x);
        set_attr(&line, "y2", &y);
        set_attr(&line, "stroke", &style.stroke);
        set_attr(&line, "stroke-width", &style.stroke_width.to_string());
        set_attr(&line, "visibility", "hidden");

        if let Err(e) = svg.append_child(&line) {
            tracing::error!(error = ?e, "Failed to append cue stick");
            return;
        }
        self.indicator = Some(line);
    }

    fn remove_indicator(&mut self) {
        if let Some(line) = self.indicator.take() {
            line.remove();
        }
        // A stick left behind by an earlier page script or turn.
        if let Some(stale) = self.document.get_element_by_id(&self.indicator_id) {
            stale.remove();
        }
    }

    fn has_indicator(&self) -> bool {
        self.connected_indicator().is_some()
    }

    fn set_indicator_end(&mut self, end: ScenePoint) {
        if let Some(line) = self.connected_indicator() {
            set_attr(line, "x2", &end.x.to_string());
            set_attr(line, "y2", &end.y.to_string());
        }
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        if let Some(line) = self.connected_indicator() {
            set_attr(line, "visibility", if visible { "visible" } else { "hidden" });
        }
    }
}
