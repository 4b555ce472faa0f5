//! Turn state machine.
//!
//! `TurnController` is driven by pointer events, the shot-submission result
//! and playback ticks. It never performs IO itself: operations that need the
//! outside world return a `TurnAction` for the host driver to carry out.

use crate::config::TurnConfig;
use crate::error::{SetupError, SubmissionError, TransformError};
use crate::frames::FrameSequence;
use crate::host::SceneHost;
use crate::player::{FramePlayer, PlaybackId, PlaybackStep};
use crate::shot::{AimVector, DevicePoint, SceneAnchor, ScenePoint, ShotVelocity};
use crate::transform::to_scene_local;

/// Phase of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Waiting for a press on the cue ball.
    #[default]
    Idle,
    /// Dragging the cue stick.
    Aiming,
    /// Shot submitted, waiting for the simulator.
    ShotPending,
    /// Replaying the simulated frames.
    Animating,
}

/// Work the driver must perform after an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnAction {
    None,
    /// Send this velocity to the simulator and report back via `shot_resolved`.
    Submit(ShotVelocity),
    /// Call `tick(id)` every `interval_ms` until `StopPlayback`.
    StartPlayback { id: PlaybackId, interval_ms: u32 },
    /// Cancel the playback timer.
    StopPlayback,
}

pub struct TurnController<H: SceneHost> {
    host: H,
    config: TurnConfig,
    state: TurnState,
    anchor: Option<SceneAnchor>,
    aim: Option<AimVector>,
    player: FramePlayer,
}

impl<H: SceneHost> TurnController<H> {
    /// Creates a controller in `Idle`. Call `setup` before the first turn.
    pub fn new(host: H, config: TurnConfig) -> Self {
        Self {
            host,
            config,
            state: TurnState::Idle,
            anchor: None,
            aim: None,
            player: FramePlayer::new(),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn anchor(&self) -> Option<SceneAnchor> {
        self.anchor
    }

    pub fn aim(&self) -> Option<AimVector> {
        self.aim
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Prepare the scene for a new turn.
    ///
    /// Re-reads the cue ball position and replaces the aiming indicator with
    /// a fresh hidden one. On failure the anchor is cleared; the next press
    /// retries.
    pub fn setup(&mut self) -> Result<SceneAnchor, SetupError> {
        self.host.remove_indicator();

        match self.host.cue_ball_center() {
            Ok(anchor) => {
                self.host.attach_indicator(anchor, &self.config.indicator);
                self.anchor = Some(anchor);
                tracing::debug!(x = anchor.center_x, y = anchor.center_y, "Cue ball located");
                Ok(anchor)
            }
            Err(e) => {
                self.anchor = None;
                tracing::warn!(error = %e, "Scene setup failed");
                Err(e)
            }
        }
    }

    /// Pointer pressed on the cue ball.
    ///
    /// The indicator's far end jumps to the press point, so a stick left over
    /// from an aborted or failed shot never shows a stale aim.
    pub fn press(&mut self, device: DevicePoint) {
        if self.state != TurnState::Idle {
            return;
        }
        let Some(anchor) = self.anchor.or_else(|| self.setup().ok()) else {
            tracing::debug!("Press ignored: no cue ball anchor");
            return;
        };

        if !self.host.has_indicator() {
            self.host.remove_indicator();
            self.host.attach_indicator(anchor, &self.config.indicator);
        }

        match self.locate(device) {
            Ok(point) => {
                self.aim = Some(AimVector::from(point));
                self.host.set_indicator_end(point);
                self.host.set_indicator_visible(true);
                self.state = TurnState::Aiming;
                tracing::debug!("Aiming");
            }
            Err(e) => self.abort_drag(&e),
        }
    }

    /// Pointer moved. Only has an effect while aiming.
    pub fn pointer_move(&mut self, device: DevicePoint) {
        if self.state != TurnState::Aiming {
            return;
        }

        match self.locate(device) {
            Ok(point) => {
                self.aim = Some(AimVector::from(point));
                self.host.set_indicator_end(point);
            }
            Err(e) => self.abort_drag(&e),
        }
    }

    /// Pointer released. Fires the shot when aiming.
    pub fn release(&mut self) -> TurnAction {
        if self.state != TurnState::Aiming {
            return TurnAction::None;
        }
        let (Some(anchor), Some(aim)) = (self.anchor, self.aim.take()) else {
            self.abort_drag(&TransformError::Detached);
            return TurnAction::None;
        };

        self.host.set_indicator_visible(false);
        let velocity = ShotVelocity::from_release(anchor, aim, self.config.shot_scale);
        self.state = TurnState::ShotPending;
        tracing::info!(vel_x = velocity.vel_x, vel_y = velocity.vel_y, "Shot fired");
        TurnAction::Submit(velocity)
    }

    /// Result of the submission started by the last `Submit`.
    pub fn shot_resolved(&mut self, result: Result<FrameSequence, SubmissionError>) -> TurnAction {
        if self.state != TurnState::ShotPending {
            tracing::debug!(state = ?self.state, "Ignoring shot result outside ShotPending");
            return TurnAction::None;
        }

        match result {
            Ok(frames) => {
                tracing::info!(frames = frames.len(), "Shot simulated");
                self.state = TurnState::Animating;
                match self.player.start(frames) {
                    Some(id) => TurnAction::StartPlayback {
                        id,
                        interval_ms: self.config.frame_interval_ms,
                    },
                    None => {
                        self.finish_turn();
                        TurnAction::None
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error shooting");
                self.state = TurnState::Idle;
                TurnAction::None
            }
        }
    }

    /// One playback timer tick.
    pub fn tick(&mut self, id: PlaybackId) -> TurnAction {
        if self.state != TurnState::Animating {
            return TurnAction::None;
        }

        match self.player.tick(id, &mut self.host) {
            PlaybackStep::Rendered(_) | PlaybackStep::Stale => TurnAction::None,
            PlaybackStep::Finished => {
                self.finish_turn();
                TurnAction::StopPlayback
            }
        }
    }

    fn locate(&self, device: DevicePoint) -> Result<ScenePoint, TransformError> {
        to_scene_local(device, self.host.screen_matrix())
    }

    fn abort_drag(&mut self, error: &TransformError) {
        tracing::warn!(error = %error, "Aim aborted");
        self.aim = None;
        if self.host.has_indicator() {
            self.host.set_indicator_visible(false);
        }
        self.state = TurnState::Idle;
    }

    fn finish_turn(&mut self) {
        self.player.cancel();
        self.aim = None;
        self.state = TurnState::Idle;
        // Failure is logged by setup; the next press retries it.
        let _ = self.setup();
        tracing::info!("Turn complete");
    }
}
