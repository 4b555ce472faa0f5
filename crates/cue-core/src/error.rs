//! Error taxonomy for a turn.
//!
//! Every error here is recovered at the boundary where it occurs and turned
//! into a transition back to `Idle`. None of them are fatal to the page.

/// Pointer coordinates could not be mapped into the scene.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("scene element is not attached or not rendered")]
    Detached,
    #[error("screen transform is not invertible")]
    Singular,
}

/// The shot-submission call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
}

/// Scene setup could not derive a `SceneAnchor`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("cue ball not found in scene")]
    CueBallNotFound,
    #[error("cue ball has invalid center: {0}")]
    InvalidCueBall(String),
}

/// A structured frame payload could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FrameFormatError {
    #[error("invalid frame batch: {0}")]
    Json(#[from] serde_json::Error),
}
