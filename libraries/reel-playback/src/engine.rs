//! Platform-agnostic media engine seam
//!
//! Abstracts the platform's decode/render pipeline. The player only issues
//! commands through [`MediaEngine`] and consumes the engine's notification
//! stream as [`EngineNotification`] values; it never touches decoding.

use crate::error::Result;
use reel_core::{MediaResource, TimeRange};
use std::time::Duration;

/// Platform-agnostic media engine
///
/// Implementors own the actual decode/render pipeline (AVPlayer, GStreamer,
/// MPV, ...). All methods are non-blocking; `seek` is the only conceptually
/// asynchronous operation and completes later via
/// [`EngineNotification::SeekCompleted`] on the same control context.
pub trait MediaEngine: Send {
    /// Assign an asset to the engine
    ///
    /// # Errors
    /// Returns an error if the engine cannot accept the resource.
    fn load(&mut self, resource: &MediaResource) -> Result<()>;

    /// Start or resume decoding/rendering
    fn play(&mut self);

    /// Halt decoding/rendering without discarding the asset
    fn pause(&mut self);

    /// Move the play-head; fire-and-forget
    ///
    /// The engine reports completion with a `SeekCompleted` notification.
    fn seek(&mut self, target: Duration);

    /// Current play-head position
    fn current_time(&self) -> Duration;

    /// Total stream duration, once known
    fn duration(&self) -> Option<Duration>;

    /// Current playback rate (0.0 = stalled or paused)
    fn rate(&self) -> f32;

    /// Whether enough content is buffered to sustain playback
    fn likely_to_keep_up(&self) -> bool;

    /// Whether the buffer is completely full
    fn buffer_full(&self) -> bool;

    /// Playback error reported by the engine, if any
    fn playback_error(&self) -> Option<String>;
}

/// Raw notifications emitted by the engine, in emission order
///
/// A closed, typed set: the player matches on these exhaustively instead of
/// observing stringly-named properties.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineNotification {
    /// Asset status became ready
    StatusReady,

    /// Asset status became failed
    StatusFailed {
        /// Engine-provided failure description
        message: String,
    },

    /// Buffered ranges changed
    LoadedRangesChanged(Vec<TimeRange>),

    /// Playback buffer ran empty
    BufferEmpty,

    /// Keep-up designation changed
    LikelyToKeepUp(bool),

    /// Playback rate changed
    RateChanged(f32),

    /// Dedicated end-of-stream notification
    PlayedToEnd,

    /// The in-flight seek finished
    SeekCompleted,
}

/// Scripted engine double shared by unit tests
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory engine that records commands and plays back scripted state
    pub(crate) struct FakeEngine {
        pub loaded: Vec<String>,
        pub seeks: Vec<Duration>,
        pub play_calls: usize,
        pub pause_calls: usize,
        pub current: Duration,
        pub total: Option<Duration>,
        pub rate: f32,
        pub keep_up: bool,
        pub full: bool,
        pub error: Option<String>,
        pub reject_load: bool,
    }

    impl FakeEngine {
        pub(crate) fn new(total: Option<Duration>) -> Self {
            Self {
                loaded: Vec::new(),
                seeks: Vec::new(),
                play_calls: 0,
                pause_calls: 0,
                current: Duration::ZERO,
                total,
                rate: 0.0,
                keep_up: false,
                full: false,
                error: None,
                reject_load: false,
            }
        }
    }

    impl MediaEngine for FakeEngine {
        fn load(&mut self, resource: &MediaResource) -> Result<()> {
            if self.reject_load {
                return Err(crate::error::PlayerError::EngineFailure(
                    "load rejected".to_string(),
                ));
            }
            self.loaded.push(resource.url.clone());
            Ok(())
        }

        fn play(&mut self) {
            self.play_calls += 1;
            self.rate = 1.0;
        }

        fn pause(&mut self) {
            self.pause_calls += 1;
            self.rate = 0.0;
        }

        fn seek(&mut self, target: Duration) {
            self.seeks.push(target);
            self.current = target;
        }

        fn current_time(&self) -> Duration {
            self.current
        }

        fn duration(&self) -> Option<Duration> {
            self.total
        }

        fn rate(&self) -> f32 {
            self.rate
        }

        fn likely_to_keep_up(&self) -> bool {
            self.keep_up
        }

        fn buffer_full(&self) -> bool {
            self.full
        }

        fn playback_error(&self) -> Option<String> {
            self.error.clone()
        }
    }
}
