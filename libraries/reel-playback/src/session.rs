//! Playback session - the state machine core
//!
//! Folds the engine's notification stream into one consistent
//! [`PlayerState`], arbitrates pending seeks against asset readiness, and
//! runs the debounced buffer-empty retry loop. One session corresponds to
//! exactly one loaded asset; `reset` replaces it wholesale.
//!
//! Everything here runs on a single control context; no operation blocks.

use crate::{
    engine::{EngineNotification, MediaEngine},
    error::{PlayerError, Result},
    events::PlayerEvent,
    sampler::Sampler,
    types::{PlayerConfig, PlayerState},
};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Host-provided callback invoked once the engine finishes a seek
pub type SeekCompletion = Box<dyn FnOnce() + Send>;

/// Internal action taken by the facade after a seek completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeekFollowUp {
    /// Nothing beyond the host completion
    None,

    /// Resume via the auto-play gate (drag-seek while mid-stream)
    Resume,

    /// Resume unconditionally (drag-seek after the stream had ended)
    ResumeAfterEnd,
}

/// A seek waiting for readiness or for the engine to finish it
///
/// At most one pending and one in-flight request exist; both slots are
/// last-write-wins. A superseded request's completion is dropped unfired.
struct SeekRequest {
    target: Duration,
    follow_up: SeekFollowUp,
    completion: Option<SeekCompletion>,
}

/// State machine for one loaded asset
pub(crate) struct PlaybackSession {
    state: PlayerState,
    is_playing: bool,

    /// Raw engine status reached ready (seeks can be issued)
    engine_ready: bool,
    /// `ReadyToPlay` was observed at least once (buffer states are live)
    has_reached_ready: bool,

    pending_seek: Option<SeekRequest>,
    inflight_seek: Option<SeekRequest>,

    /// Re-entrancy guard for the buffer-empty retry loop
    retry_waiting: bool,
    retry_deadline: Option<Instant>,
    retry_delay: Duration,

    last_current: Duration,
    last_total: Duration,

    sampler: Sampler,
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackSession {
    pub(crate) fn new(config: &PlayerConfig) -> Self {
        Self {
            state: PlayerState::NotSet,
            is_playing: false,
            engine_ready: false,
            has_reached_ready: false,
            pending_seek: None,
            inflight_seek: None,
            retry_waiting: false,
            retry_deadline: None,
            retry_delay: config.buffer_retry_delay,
            last_current: Duration::ZERO,
            last_total: Duration::ZERO,
            sampler: Sampler::new(config.tick_interval),
            pending_events: Vec::new(),
        }
    }

    // ===== Observed state =====

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn last_current_time(&self) -> Duration {
        self.last_current
    }

    pub(crate) fn last_total_time(&self) -> Duration {
        self.last_total
    }

    pub(crate) fn has_pending_seek(&self) -> bool {
        self.pending_seek.is_some()
    }

    // ===== Events =====

    pub(crate) fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }

    pub(crate) fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub(crate) fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Transition the state; emits only when the value actually changes
    pub(crate) fn set_state(&mut self, state: PlayerState) {
        if self.state == state {
            return;
        }
        debug!(from = ?self.state, to = ?state, "player state changed");
        self.state = state;
        self.emit(PlayerEvent::StateChanged { state });
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing == playing {
            return;
        }
        self.is_playing = playing;
        self.emit(PlayerEvent::PlayingChanged { playing });
    }

    // ===== Commands =====

    pub(crate) fn play(&mut self, engine: &mut dyn MediaEngine, now: Instant) {
        engine.play();
        self.sampler.arm(now);
        self.set_playing(true);
    }

    pub(crate) fn pause(&mut self, engine: &mut dyn MediaEngine) {
        engine.pause();
        self.set_playing(false);
        // Defer the next tick instead of tearing the schedule down
        self.sampler.defer_fire();
    }

    /// Readiness-gated seek; accepted in any state
    ///
    /// Pre-readiness the request parks in the single pending slot (last
    /// write wins) and is issued automatically once the engine status
    /// becomes ready. Non-finite targets are rejected with no state change
    /// and the completion is never invoked.
    pub(crate) fn seek(
        &mut self,
        engine: &mut dyn MediaEngine,
        seconds: f64,
        follow_up: SeekFollowUp,
        completion: Option<SeekCompletion>,
        now: Instant,
    ) -> Result<()> {
        if !seconds.is_finite() {
            warn!(seconds, "rejected seek with non-finite target");
            return Err(PlayerError::InvalidSeekTarget(seconds));
        }
        let target = Duration::try_from_secs_f64(seconds.max(0.0))
            .map_err(|_| PlayerError::InvalidSeekTarget(seconds))?;

        self.sampler.arm(now);
        let request = SeekRequest {
            target,
            follow_up,
            completion,
        };
        if self.engine_ready {
            self.issue_seek(engine, request);
        } else {
            self.pending_seek = Some(request);
        }
        Ok(())
    }

    fn issue_seek(&mut self, engine: &mut dyn MediaEngine, request: SeekRequest) {
        engine.seek(request.target);
        // Supersedes any in-flight request; its completion never fires
        self.inflight_seek = Some(request);
        // A seek is the only way out of the ended state
        if self.state == PlayerState::PlayedToEnd {
            self.set_state(PlayerState::Buffering);
        }
    }

    /// States buffering notifications must not disturb
    ///
    /// `Error` is terminal until a new asset replaces the session;
    /// `PlayedToEnd` yields only to a seek (replay, drag-seek) or a reset.
    fn state_is_latched(&self) -> bool {
        matches!(self.state, PlayerState::Error | PlayerState::PlayedToEnd)
    }

    /// Tear the session down before a new asset takes over
    ///
    /// Runs synchronously: once this returns, no timer fires and no parked
    /// completion can observe the next asset's session.
    pub(crate) fn reset(&mut self, engine: &mut dyn MediaEngine) {
        engine.pause();
        self.sampler.defer_fire();
        self.pending_seek = None;
        self.inflight_seek = None;
        self.retry_waiting = false;
        self.retry_deadline = None;
        self.engine_ready = false;
        self.has_reached_ready = false;
        self.last_current = Duration::ZERO;
        self.last_total = Duration::ZERO;
        self.set_playing(false);
        self.set_state(PlayerState::NotSet);
    }

    // ===== Notifications =====

    /// Process one engine notification
    ///
    /// Notifications must be delivered in emission order; they are folded
    /// into the state in exactly that order.
    pub(crate) fn handle_notification(
        &mut self,
        engine: &mut dyn MediaEngine,
        notification: EngineNotification,
        now: Instant,
    ) -> Option<SeekFollowUp> {
        match notification {
            EngineNotification::StatusReady => {
                self.on_status_ready(engine);
                None
            }
            EngineNotification::StatusFailed { message } => {
                warn!(%message, "engine status failed");
                self.set_state(PlayerState::Error);
                None
            }
            EngineNotification::LoadedRangesChanged(ranges) => {
                if let Some(first) = ranges.first() {
                    let total = engine.duration().unwrap_or_default();
                    if !total.is_zero() {
                        self.last_total = total;
                    }
                    self.emit(PlayerEvent::LoadedTimeChanged {
                        loaded: first.end(),
                        total,
                    });
                }
                None
            }
            EngineNotification::BufferEmpty => {
                if !self.state_is_latched() {
                    self.begin_buffer_retry(engine, now);
                }
                None
            }
            EngineNotification::LikelyToKeepUp(keep_up) => {
                if self.has_reached_ready && !self.state_is_latched() {
                    self.set_state(if keep_up {
                        PlayerState::BufferFinished
                    } else {
                        PlayerState::Buffering
                    });
                }
                None
            }
            EngineNotification::RateChanged(_) => {
                self.update_status(engine, false);
                None
            }
            EngineNotification::PlayedToEnd => {
                self.play_did_end(engine);
                None
            }
            EngineNotification::SeekCompleted => self.on_seek_completed(),
        }
    }

    /// Asset became ready: advance out of `NotSet`
    ///
    /// With a pending seek the state parks in `Buffering` until the seek
    /// completes, so `ReadyToPlay` always implies the play-head already sits
    /// at the caller-intended position.
    fn on_status_ready(&mut self, engine: &mut dyn MediaEngine) {
        self.engine_ready = true;
        self.set_state(PlayerState::Buffering);
        if let Some(request) = self.pending_seek.take() {
            self.issue_seek(engine, request);
        } else {
            self.has_reached_ready = true;
            self.set_state(PlayerState::ReadyToPlay);
        }
    }

    fn on_seek_completed(&mut self) -> Option<SeekFollowUp> {
        let request = self.inflight_seek.take()?;
        if let Some(completion) = request.completion {
            completion();
        }
        // A completion landing after a failure must not revive the session
        if self.state == PlayerState::Error {
            return None;
        }
        // A completed seek implies engine readiness; the first one promotes
        // the session to ReadyToPlay with the play-head in position.
        if !self.has_reached_ready {
            self.has_reached_ready = true;
            self.set_state(PlayerState::ReadyToPlay);
        }
        match request.follow_up {
            SeekFollowUp::None => None,
            other => Some(other),
        }
    }

    // ===== Buffering =====

    /// Debounced buffer-empty retry loop
    ///
    /// Re-entrant triggers are swallowed by the `retry_waiting` guard, so
    /// there is never more than one pending re-check.
    fn begin_buffer_retry(&mut self, engine: &mut dyn MediaEngine, now: Instant) {
        self.set_state(PlayerState::Buffering);
        if self.retry_waiting {
            return;
        }
        self.retry_waiting = true;
        engine.pause();
        self.retry_deadline = Some(now + self.retry_delay);
    }

    /// Re-derive buffering/terminal state from the engine
    fn update_status(&mut self, engine: &mut dyn MediaEngine, include_loading: bool) {
        if include_loading && self.has_reached_ready && !self.state_is_latched() {
            if engine.likely_to_keep_up() || engine.buffer_full() {
                self.set_state(PlayerState::BufferFinished);
            } else {
                self.set_state(PlayerState::Buffering);
            }
        }
        if engine.rate() == 0.0 {
            if let Some(message) = engine.playback_error() {
                warn!(%message, "engine reported playback error");
                self.set_state(PlayerState::Error);
                return;
            }
            // Some engines never emit a dedicated end notification
            if let Some(total) = engine.duration() {
                if !total.is_zero() && engine.current_time() >= total {
                    self.play_did_end(engine);
                }
            }
        }
    }

    /// End-of-stream; idempotent while already ended
    fn play_did_end(&mut self, engine: &mut dyn MediaEngine) {
        if self.state == PlayerState::PlayedToEnd {
            return;
        }
        let total = engine.duration().unwrap_or(self.last_total);
        self.last_current = total;
        self.last_total = total;
        self.emit(PlayerEvent::PlayTimeChanged {
            current: total,
            total,
        });
        self.set_state(PlayerState::PlayedToEnd);
        self.set_playing(false);
        self.sampler.defer_fire();
    }

    // ===== Ticks =====

    /// Drive time-based work: the retry deadline and the periodic sampler
    pub(crate) fn tick(&mut self, engine: &mut dyn MediaEngine, now: Instant) {
        if let Some(deadline) = self.retry_deadline {
            if now >= deadline {
                self.retry_deadline = None;
                self.retry_waiting = false;
                // A failure or stream end during the wait cancels the loop
                if !self.state_is_latched() {
                    if engine.likely_to_keep_up() {
                        self.set_state(PlayerState::BufferFinished);
                    } else {
                        self.begin_buffer_retry(engine, now);
                    }
                }
            }
        }

        if self.sampler.poll(now) {
            trace!("sampler tick");
            if let Some(total) = engine.duration() {
                if !total.is_zero() {
                    let current = engine.current_time();
                    self.last_current = current;
                    self.last_total = total;
                    self.emit(PlayerEvent::PlayTimeChanged { current, total });
                }
            }
            self.update_status(engine, true);
        }
    }

    #[cfg(test)]
    pub(crate) fn sampler_armed(&self) -> bool {
        self.sampler.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::FakeEngine;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn session() -> PlaybackSession {
        PlaybackSession::new(&PlayerConfig::default())
    }

    fn state_changes(events: &[PlayerEvent]) -> Vec<PlayerState> {
        events
            .iter()
            .filter_map(|event| match event {
                PlayerEvent::StateChanged { state } => Some(*state),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn duplicate_state_sets_emit_once() {
        let mut session = session();
        session.set_state(PlayerState::Buffering);
        session.set_state(PlayerState::Buffering);
        session.set_state(PlayerState::Buffering);

        let events = session.drain_events();
        assert_eq!(state_changes(&events), vec![PlayerState::Buffering]);
    }

    #[test]
    fn pre_ready_seek_is_deferred_and_last_write_wins() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        session
            .seek(&mut engine, 10.0, SeekFollowUp::None, None, now)
            .unwrap();
        session
            .seek(&mut engine, 30.0, SeekFollowUp::None, None, now)
            .unwrap();
        assert!(engine.seeks.is_empty());
        assert!(session.has_pending_seek());

        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        assert_eq!(engine.seeks, vec![Duration::from_secs(30)]);
        assert_eq!(session.state(), PlayerState::Buffering);

        session.handle_notification(&mut engine, EngineNotification::SeekCompleted, now);
        assert_eq!(session.state(), PlayerState::ReadyToPlay);
    }

    #[test]
    fn ready_without_pending_seek_is_immediate() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        assert_eq!(session.state(), PlayerState::ReadyToPlay);

        let events = session.drain_events();
        assert_eq!(
            state_changes(&events),
            vec![PlayerState::Buffering, PlayerState::ReadyToPlay]
        );
    }

    #[test]
    fn completion_fires_exactly_once_for_the_applied_seek() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        session
            .seek(
                &mut engine,
                10.0,
                SeekFollowUp::None,
                Some(Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                now,
            )
            .unwrap();
        let counter = Arc::clone(&second);
        session
            .seek(
                &mut engine,
                30.0,
                SeekFollowUp::None,
                Some(Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                now,
            )
            .unwrap();

        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        session.handle_notification(&mut engine, EngineNotification::SeekCompleted, now);
        // A stray duplicate completion has nothing in flight to finish
        session.handle_notification(&mut engine, EngineNotification::SeekCompleted, now);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn non_finite_seek_is_rejected_without_side_effects() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let result = session.seek(
            &mut engine,
            f64::NAN,
            SeekFollowUp::None,
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            now,
        );

        assert!(matches!(result, Err(PlayerError::InvalidSeekTarget(_))));
        assert_eq!(session.state(), PlayerState::NotSet);
        assert!(!session.has_pending_seek());
        assert!(engine.seeks.is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let result = session.seek(&mut engine, f64::INFINITY, SeekFollowUp::None, None, now);
        assert!(matches!(result, Err(PlayerError::InvalidSeekTarget(_))));
    }

    #[test]
    fn buffer_retry_guard_holds_under_reentrant_triggers() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);

        session.handle_notification(&mut engine, EngineNotification::BufferEmpty, now);
        let pauses_after_first = engine.pause_calls;
        session.handle_notification(&mut engine, EngineNotification::BufferEmpty, now);

        // The guard swallowed the second trigger: one pause, one deadline
        assert_eq!(engine.pause_calls, pauses_after_first);
        assert_eq!(session.state(), PlayerState::Buffering);

        // Deadline fires with the buffer still starved: loop re-arms
        engine.keep_up = false;
        session.tick(&mut engine, now + Duration::from_secs(1));
        assert_eq!(engine.pause_calls, pauses_after_first + 1);
        assert_eq!(session.state(), PlayerState::Buffering);

        // Recovered: resolves to BufferFinished
        engine.keep_up = true;
        session.tick(&mut engine, now + Duration::from_secs(2));
        assert_eq!(session.state(), PlayerState::BufferFinished);
    }

    #[test]
    fn played_to_end_is_idempotent() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(100)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        session.drain_events();

        session.handle_notification(&mut engine, EngineNotification::PlayedToEnd, now);
        let first = session.drain_events();
        assert!(state_changes(&first).contains(&PlayerState::PlayedToEnd));

        // Dedicated notification again, then the inferred path
        session.handle_notification(&mut engine, EngineNotification::PlayedToEnd, now);
        engine.rate = 0.0;
        engine.current = Duration::from_secs(100);
        session.handle_notification(&mut engine, EngineNotification::RateChanged(0.0), now);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn error_state_survives_buffering_noise() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(100)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);

        // Stall first so a retry deadline is pending when the failure lands
        session.handle_notification(&mut engine, EngineNotification::BufferEmpty, now);
        session.handle_notification(
            &mut engine,
            EngineNotification::StatusFailed {
                message: "network gone".to_string(),
            },
            now,
        );
        assert_eq!(session.state(), PlayerState::Error);
        let pauses = engine.pause_calls;

        engine.keep_up = true;
        session.handle_notification(&mut engine, EngineNotification::LikelyToKeepUp(true), now);
        assert_eq!(session.state(), PlayerState::Error);

        session.handle_notification(&mut engine, EngineNotification::BufferEmpty, now);
        assert_eq!(session.state(), PlayerState::Error);
        assert_eq!(engine.pause_calls, pauses);

        // The stale retry deadline resolves without resurrecting the session
        session.tick(&mut engine, now + Duration::from_secs(1));
        assert_eq!(session.state(), PlayerState::Error);
    }

    #[test]
    fn seek_completion_after_failure_does_not_revive_the_session() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(100)));
        let mut session = session();
        let now = Instant::now();

        // Pending seek keeps has_reached_ready unset until completion
        session
            .seek(&mut engine, 30.0, SeekFollowUp::Resume, None, now)
            .unwrap();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        session.handle_notification(
            &mut engine,
            EngineNotification::StatusFailed {
                message: "stream dropped".to_string(),
            },
            now,
        );

        let follow_up =
            session.handle_notification(&mut engine, EngineNotification::SeekCompleted, now);
        assert_eq!(follow_up, None);
        assert_eq!(session.state(), PlayerState::Error);
    }

    #[test]
    fn ended_state_yields_only_to_a_seek() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(100)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        session.handle_notification(&mut engine, EngineNotification::PlayedToEnd, now);

        engine.keep_up = true;
        session.handle_notification(&mut engine, EngineNotification::LikelyToKeepUp(true), now);
        assert_eq!(session.state(), PlayerState::PlayedToEnd);
        session.handle_notification(&mut engine, EngineNotification::BufferEmpty, now);
        assert_eq!(session.state(), PlayerState::PlayedToEnd);

        // A seek re-opens the session; buffer states are live again
        session
            .seek(&mut engine, 0.0, SeekFollowUp::None, None, now)
            .unwrap();
        assert_eq!(session.state(), PlayerState::Buffering);
        session.handle_notification(&mut engine, EngineNotification::SeekCompleted, now);
        session.handle_notification(&mut engine, EngineNotification::LikelyToKeepUp(true), now);
        assert_eq!(session.state(), PlayerState::BufferFinished);
    }

    #[test]
    fn rate_zero_with_engine_error_is_terminal() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(100)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);

        engine.rate = 0.0;
        engine.error = Some("decode failed".to_string());
        session.handle_notification(&mut engine, EngineNotification::RateChanged(0.0), now);
        assert_eq!(session.state(), PlayerState::Error);
    }

    #[test]
    fn loaded_ranges_surface_first_range_end() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        let ranges = vec![
            reel_core::TimeRange::new(Duration::ZERO, Duration::from_secs(35)),
            reel_core::TimeRange::new(Duration::from_secs(90), Duration::from_secs(5)),
        ];
        session.handle_notification(
            &mut engine,
            EngineNotification::LoadedRangesChanged(ranges),
            now,
        );

        let events = session.drain_events();
        assert!(events.contains(&PlayerEvent::LoadedTimeChanged {
            loaded: Duration::from_secs(35),
            total: Duration::from_secs(400),
        }));
    }

    #[test]
    fn pause_defers_sampler_instead_of_dropping_it() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        session.play(&mut engine, now);
        assert!(session.sampler_armed());
        session.pause(&mut engine);
        assert!(!session.sampler_armed());

        // No tick fires while paused
        session.drain_events();
        session.tick(&mut engine, now + Duration::from_secs(30));
        assert!(session.drain_events().is_empty());

        session.play(&mut engine, now + Duration::from_secs(31));
        session.tick(&mut engine, now + Duration::from_secs(31));
        assert!(!session.drain_events().is_empty());
    }

    #[test]
    fn reset_clears_pending_seeks_and_flags() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        session
            .seek(
                &mut engine,
                30.0,
                SeekFollowUp::None,
                Some(Box::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                now,
            )
            .unwrap();
        session.play(&mut engine, now);

        session.reset(&mut engine);
        assert_eq!(session.state(), PlayerState::NotSet);
        assert!(!session.is_playing());
        assert!(!session.has_pending_seek());
        assert!(!session.sampler_armed());

        // The stale asset's readiness must not replay the dropped seek
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        assert!(engine.seeks.is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn tick_reports_time_and_rederives_buffer_state() {
        let mut engine = FakeEngine::new(Some(Duration::from_secs(400)));
        let mut session = session();
        let now = Instant::now();
        session.handle_notification(&mut engine, EngineNotification::StatusReady, now);
        session.play(&mut engine, now);
        session.drain_events();

        engine.current = Duration::from_secs(12);
        engine.keep_up = true;
        session.tick(&mut engine, now);

        let events = session.drain_events();
        assert!(events.contains(&PlayerEvent::PlayTimeChanged {
            current: Duration::from_secs(12),
            total: Duration::from_secs(400),
        }));
        assert_eq!(session.state(), PlayerState::BufferFinished);
        assert_eq!(session.last_current_time(), Duration::from_secs(12));
    }
}
