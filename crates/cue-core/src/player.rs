//! Fixed-cadence frame playback.
//!
//! The player owns the cursor; whoever drives the cadence (an interval
//! timer in the browser) calls `tick` once per period with the id it was
//! handed by `start`.

use crate::frames::FrameSequence;
use crate::host::FrameSink;

/// Delay between rendered frames, in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 10;

/// Identifies one playback so ticks from a cancelled one are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackId(u64);

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStep {
    /// Frame at this index was rendered.
    Rendered(usize),
    /// Nothing left to render; the playback is no longer active.
    Finished,
    /// The id does not belong to the active playback.
    Stale,
}

#[derive(Debug)]
struct ActivePlayback {
    id: PlaybackId,
    frames: FrameSequence,
    next: usize,
    end: usize,
}

/// Replays a `FrameSequence` into a `FrameSink`.
#[derive(Debug, Default)]
pub struct FramePlayer {
    active: Option<ActivePlayback>,
    next_id: u64,
}

impl FramePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin playing `frames`, cancelling any playback already running.
    ///
    /// Returns `None` when the sequence has nothing renderable; playback is
    /// then complete without touching the scene.
    pub fn start(&mut self, frames: FrameSequence) -> Option<PlaybackId> {
        if let Some(previous) = self.active.take() {
            tracing::debug!(id = previous.id.0, "Cancelled previous playback");
        }

        let range = frames.playable_range();
        if range.is_empty() {
            tracing::debug!(len = frames.len(), "Frame sequence has no playable frames");
            return None;
        }

        self.next_id += 1;
        let id = PlaybackId(self.next_id);
        tracing::debug!(id = id.0, frames = range.len(), "Playback started");
        self.active = Some(ActivePlayback {
            id,
            frames,
            next: range.start,
            end: range.end,
        });
        Some(id)
    }

    /// Render the next frame of playback `id`.
    pub fn tick(&mut self, id: PlaybackId, sink: &mut impl FrameSink) -> PlaybackStep {
        let Some(active) = self.active.as_mut().filter(|a| a.id == id) else {
            return PlaybackStep::Stale;
        };

        if active.next >= active.end {
            self.active = None;
            return PlaybackStep::Finished;
        }

        let index = active.next;
        if let Some(payload) = active.frames.get(index) {
            sink.replace_content(payload);
        }
        tracing::debug!(index, "Rendered frame");
        active.next += 1;
        PlaybackStep::Rendered(index)
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<PlaybackId> {
        self.active.as_ref().map(|a| a.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Screen {
        rendered: Vec<String>,
    }

    impl FrameSink for Screen {
        fn replace_content(&mut self, payload: &str) {
            self.rendered.push(payload.to_string());
        }
    }

    fn run_to_end(player: &mut FramePlayer, id: PlaybackId, screen: &mut Screen) -> usize {
        let mut ticks = 0;
        while player.tick(id, screen) != PlaybackStep::Finished {
            ticks += 1;
            assert!(ticks < 1000, "playback never finished");
        }
        ticks
    }

    #[test]
    fn test_renders_middle_frames_in_order() {
        let mut player = FramePlayer::new();
        let mut screen = Screen::default();

        let id = player.start(FrameSequence::from_delimited("f0,f1,f2,f3")).unwrap();
        assert_eq!(player.tick(id, &mut screen), PlaybackStep::Rendered(1));
        assert_eq!(player.tick(id, &mut screen), PlaybackStep::Rendered(2));
        assert_eq!(player.tick(id, &mut screen), PlaybackStep::Finished);

        assert_eq!(screen.rendered, vec!["f1", "f2"]);
        assert!(!player.is_active());
    }

    #[test]
    fn test_short_sequences_complete_immediately() {
        let mut player = FramePlayer::new();
        for body in ["f0", "f0,f1"] {
            assert!(player.start(FrameSequence::from_delimited(body)).is_none());
        }
        assert!(player.start(FrameSequence::default()).is_none());
        assert!(!player.is_active());
    }

    #[test]
    fn test_restart_cancels_previous_playback() {
        let mut player = FramePlayer::new();
        let mut screen = Screen::default();

        let a = player.start(FrameSequence::from_delimited("a0,a1,a2,a3,a4")).unwrap();
        assert_eq!(player.tick(a, &mut screen), PlaybackStep::Rendered(1));

        let b = player.start(FrameSequence::from_delimited("b0,b1,b2")).unwrap();
        assert_ne!(a, b);
        assert_eq!(player.active_id(), Some(b));

        // A's timer firing late must not touch the screen.
        assert_eq!(player.tick(a, &mut screen), PlaybackStep::Stale);

        run_to_end(&mut player, b, &mut screen);
        assert_eq!(screen.rendered, vec!["a1", "b1"]);

        // Only B finished; A never reports completion.
        assert_eq!(player.tick(a, &mut screen), PlaybackStep::Stale);
        assert_eq!(player.tick(b, &mut screen), PlaybackStep::Stale);
    }

    #[test]
    fn test_start_with_short_sequence_still_cancels() {
        let mut player = FramePlayer::new();
        let mut screen = Screen::default();

        let a = player.start(FrameSequence::from_delimited("a0,a1,a2")).unwrap();
        assert!(player.start(FrameSequence::from_delimited("b0")).is_none());
        assert_eq!(player.tick(a, &mut screen), PlaybackStep::Stale);
        assert!(screen.rendered.is_empty());
    }

    #[test]
    fn test_cancel_stops_playback() {
        let mut player = FramePlayer::new();
        let mut screen = Screen::default();

        let id = player.start(FrameSequence::from_delimited("f0,f1,f2,f3")).unwrap();
        player.cancel();
        assert_eq!(player.tick(id, &mut screen), PlaybackStep::Stale);
        assert!(screen.rendered.is_empty());
    }
}
