//! Shot submission over HTTP.

use cue_core::{FrameSequence, ShotVelocity, SubmissionError};
use gloo::net::http::Request;
use tracing::debug;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Posts shots to the simulator and decodes the returned frames.
#[derive(Debug, Clone)]
pub struct ShotClient {
    url: String,
}

impl ShotClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub async fn submit(&self, velocity: ShotVelocity) -> Result<FrameSequence, SubmissionError> {
        let body = encode_form(velocity);
        debug!("Shot request: POST {} {body}", self.url);

        let response = Request::post(&self.url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .map_err(|e| SubmissionError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let text = response
            .text()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        debug!(status, bytes = text.len(), "Shot response");
        decode_response(status, content_type.as_deref(), &text)
    }
}

/// Form body the simulator expects: `velX=..&velY=..`.
pub(crate) fn encode_form(velocity: ShotVelocity) -> String {
    format!("velX={}&velY={}", velocity.vel_x, velocity.vel_y)
}

pub(crate) fn decode_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<FrameSequence, SubmissionError> {
    if !(200..300).contains(&status) {
        return Err(SubmissionError::Status {
            code: status,
            body: body.to_string(),
        });
    }

    let is_json = content_type.is_some_and(|ct| ct.trim_start().starts_with(JSON_CONTENT_TYPE));
    if is_json {
        FrameSequence::from_json(body).map_err(|e| SubmissionError::Decode(e.to_string()))
    } else {
        Ok(FrameSequence::from_delimited(body))
    }
}
