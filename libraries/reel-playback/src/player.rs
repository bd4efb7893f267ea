//! Player facade - the host-facing command surface
//!
//! Mediates user intent (play, pause, seek, drags, volume) against the
//! readiness-gated state machine and reacts to its transitions: readiness
//! starts playback unless the user paused, buffer recovery auto-resumes,
//! end-of-stream arms the replay path.

use crate::{
    engine::{EngineNotification, MediaEngine},
    error::Result,
    events::PlayerEvent,
    scrub::ScrubCoordinator,
    session::{PlaybackSession, SeekCompletion, SeekFollowUp},
    types::{PanDirection, PlayerConfig, PlayerState},
    volume::LevelSlider,
};
use reel_core::MediaResource;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Video player control surface
///
/// Owns the playback session, the scrub coordinator, and the volume and
/// brightness sliders. All entry points must be called from one control
/// context; the host drives time by calling [`Player::tick`] and feeds the
/// engine's notification stream into [`Player::handle_notification`].
/// Emitted events accumulate until [`Player::drain_events`].
pub struct Player {
    engine: Box<dyn MediaEngine>,
    config: PlayerConfig,
    session: PlaybackSession,
    scrub: ScrubCoordinator,
    volume: LevelSlider,
    brightness: LevelSlider,

    media: Option<MediaResource>,
    /// Asset handed to the engine (lazy until the first play without auto-play)
    media_committed: bool,
    /// The last pause was user-initiated, blocking auto-resume
    pause_by_user: bool,
    /// The stream ended; the next drag-seek or replay clears it
    play_to_end: bool,
}

impl Player {
    /// Create a player around a platform engine
    pub fn new(engine: Box<dyn MediaEngine>, config: PlayerConfig) -> Self {
        let session = PlaybackSession::new(&config);
        Self {
            engine,
            config,
            session,
            scrub: ScrubCoordinator::new(),
            volume: LevelSlider::default(),
            brightness: LevelSlider::default(),
            media: None,
            media_committed: false,
            pause_by_user: false,
            play_to_end: false,
        }
    }

    // ===== Media lifecycle =====

    /// Assign a new asset, replacing the previous session wholesale
    ///
    /// The old session is torn down synchronously before the new asset is
    /// touched: its sampler stops and its parked seek completions are
    /// dropped, so no stale callback can observe the new session. With
    /// `auto_play` enabled the asset is committed and started immediately;
    /// otherwise commit waits for the first `play`.
    pub fn set_media(&mut self, resource: MediaResource, now: Instant) -> Result<()> {
        debug!(url = %resource.url, "replacing media");
        self.session.reset(self.engine.as_mut());
        self.scrub.reset();
        self.play_to_end = false;
        self.pause_by_user = false;
        self.media_committed = false;
        self.media = Some(resource);
        if self.config.auto_play {
            self.commit_media()?;
            self.play(now);
        }
        Ok(())
    }

    /// Tear down the current session; a new asset is required to recover
    pub fn stop(&mut self) {
        self.session.reset(self.engine.as_mut());
        self.scrub.reset();
        self.media = None;
        self.media_committed = false;
        self.play_to_end = false;
    }

    fn commit_media(&mut self) -> Result<()> {
        if let Some(resource) = &self.media {
            self.engine.load(resource)?;
            self.media_committed = true;
        }
        Ok(())
    }

    // ===== Playback commands =====

    /// Start or resume playback; a harmless no-op without an asset
    pub fn play(&mut self, now: Instant) {
        if self.media.is_none() {
            return;
        }
        if !self.media_committed {
            // Lazy commit on first user-initiated play
            if let Err(error) = self.commit_media() {
                warn!(%error, "engine rejected media");
                self.session.set_state(PlayerState::Error);
                return;
            }
        }
        self.session.play(self.engine.as_mut(), now);
        self.pause_by_user = false;
    }

    /// Pause playback
    ///
    /// `allow_auto_play = false` marks the pause as user-initiated, which
    /// blocks [`Player::auto_play`] from resuming after buffering recovers.
    pub fn pause(&mut self, allow_auto_play: bool) {
        self.session.pause(self.engine.as_mut());
        self.pause_by_user = !allow_auto_play;
    }

    /// Resume after a system pause; gated on user intent and stream state
    pub fn auto_play(&mut self, now: Instant) {
        if !self.pause_by_user && self.media_committed && !self.play_to_end {
            self.play(now);
        }
    }

    /// Seek to an absolute position in seconds; a harmless no-op without
    /// an asset
    ///
    /// Deferred until readiness when the asset is still loading; the
    /// completion fires exactly once, after the engine reports the seek
    /// finished. Non-finite targets are rejected with no state change.
    pub fn seek(
        &mut self,
        seconds: f64,
        completion: Option<SeekCompletion>,
        now: Instant,
    ) -> Result<()> {
        if self.media.is_none() {
            return Ok(());
        }
        self.session.seek(
            self.engine.as_mut(),
            seconds,
            SeekFollowUp::None,
            completion,
            now,
        )
    }

    /// Restart an ended stream from the beginning
    pub fn replay(&mut self, now: Instant) {
        self.play_to_end = false;
        let _ = self
            .session
            .seek(self.engine.as_mut(), 0.0, SeekFollowUp::None, None, now);
        self.play(now);
    }

    // ===== Volume & brightness =====

    /// Raise volume by the configured step
    pub fn add_volume(&mut self) {
        self.nudge_volume(self.config.volume_step);
    }

    /// Lower volume by the configured step
    pub fn reduce_volume(&mut self) {
        self.nudge_volume(-self.config.volume_step);
    }

    /// Set the volume slider directly (0.0..=1.0)
    pub fn set_volume(&mut self, value: f32) {
        if self.volume.set(value) {
            let value = self.volume.value();
            self.session.emit(PlayerEvent::VolumeChanged { value });
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume.value()
    }

    /// Nudge brightness by a signed delta (0.0..=1.0 range)
    pub fn adjust_brightness(&mut self, delta: f32) {
        if self.brightness.nudge(delta) {
            let value = self.brightness.value();
            self.session.emit(PlayerEvent::BrightnessChanged { value });
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.value()
    }

    fn nudge_volume(&mut self, delta: f32) {
        if self.volume.nudge(delta) {
            let value = self.volume.value();
            self.session.emit(PlayerEvent::VolumeChanged { value });
        }
    }

    // ===== Drag gestures =====

    /// Gesture began; direction and region are decided here, once
    pub fn begin_drag(
        &mut self,
        velocity_x: f64,
        velocity_y: f64,
        location_x: f64,
        view_width: f64,
    ) {
        let baseline = self.engine.current_time().as_secs_f64();
        self.scrub
            .begin(velocity_x, velocity_y, location_x, view_width, baseline);
    }

    /// Gesture moved; horizontal previews a seek, vertical nudges a slider
    pub fn drag_changed(&mut self, velocity_x: f64, velocity_y: f64) {
        if !self.scrub.is_active() {
            return;
        }
        match self.scrub.direction() {
            PanDirection::Horizontal => {
                let Some(total) = self.engine.duration() else {
                    return;
                };
                if total.is_zero() {
                    return;
                }
                let target = self.scrub.step_horizontal(velocity_x, total.as_secs_f64());
                self.session.emit(PlayerEvent::SeekPreview {
                    target: Duration::from_secs_f64(target),
                    total,
                    forward: velocity_x > 0.0,
                });
            }
            PanDirection::Vertical => {
                // Upward pan (negative dy) raises the level
                let delta = -(velocity_y as f32) / 10_000.0;
                if self.scrub.is_volume_region() {
                    self.nudge_volume(delta);
                } else {
                    self.adjust_brightness(delta);
                }
            }
        }
    }

    /// Gesture ended; a horizontal drag commits exactly one seek
    pub fn end_drag(&mut self, now: Instant) {
        if !self.scrub.is_active() {
            return;
        }
        match self.scrub.direction() {
            PanDirection::Horizontal => {
                let target = self.scrub.finish();
                let follow_up = if self.play_to_end {
                    self.play_to_end = false;
                    SeekFollowUp::ResumeAfterEnd
                } else {
                    SeekFollowUp::Resume
                };
                let _ = self
                    .session
                    .seek(self.engine.as_mut(), target, follow_up, None, now);
            }
            PanDirection::Vertical => {
                self.scrub.reset();
            }
        }
    }

    // ===== Engine feed =====

    /// Process one engine notification, in emission order
    pub fn handle_notification(&mut self, notification: EngineNotification, now: Instant) {
        let previous = self.session.state();
        let follow_up =
            self.session
                .handle_notification(self.engine.as_mut(), notification, now);
        self.react_to_transition(previous, now);
        match follow_up {
            Some(SeekFollowUp::Resume) => self.auto_play(now),
            Some(SeekFollowUp::ResumeAfterEnd) => self.play(now),
            _ => {}
        }
    }

    /// Drive the periodic sampler and the buffering-retry deadline
    pub fn tick(&mut self, now: Instant) {
        let previous = self.session.state();
        self.session.tick(self.engine.as_mut(), now);
        self.react_to_transition(previous, now);
    }

    /// Facade-level reactions to state machine transitions
    fn react_to_transition(&mut self, previous: PlayerState, now: Instant) {
        let state = self.session.state();
        if state == previous {
            return;
        }
        match state {
            PlayerState::ReadyToPlay => {
                if !self.pause_by_user {
                    self.play(now);
                }
            }
            PlayerState::BufferFinished => self.auto_play(now),
            PlayerState::PlayedToEnd => self.play_to_end = true,
            _ => {}
        }
    }

    // ===== Observation =====

    pub fn state(&self) -> PlayerState {
        self.session.state()
    }

    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Last sampled play-head position
    pub fn current_time(&self) -> Duration {
        self.session.last_current_time()
    }

    /// Last known total duration
    pub fn total_time(&self) -> Duration {
        self.session.last_total_time()
    }

    /// Whether the stream has ended and not been restarted
    pub fn has_ended(&self) -> bool {
        self.play_to_end
    }

    pub fn media(&self) -> Option<&MediaResource> {
        self.media.as_ref()
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.session.drain_events()
    }

    pub fn has_pending_events(&self) -> bool {
        self.session.has_pending_events()
    }
}
