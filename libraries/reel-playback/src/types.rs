//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Player state
///
/// Exactly one state is active at a time. State-changed events fire only
/// when the new value differs from the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// No asset assigned yet, or the session was reset
    NotSet,

    /// Engine is ready and the play-head sits at the caller-intended position
    ReadyToPlay,

    /// Not enough content buffered to sustain playback
    Buffering,

    /// Enough content buffered to keep up
    BufferFinished,

    /// The stream reached its end
    PlayedToEnd,

    /// The engine reported a playback failure; terminal until a new asset is set
    Error,
}

/// Direction of an active drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    /// Seek scrubbing
    Horizontal,

    /// Volume or brightness adjustment
    Vertical,
}

/// Configuration for a player instance
///
/// An explicit per-instance value threaded into the constructor, so tests
/// can vary it without touching process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Commit and start the asset as soon as it is assigned (default: true)
    pub auto_play: bool,

    /// Periodic sampler interval (default: 500 ms)
    pub tick_interval: Duration,

    /// Debounce delay for the buffer-empty retry loop (default: 1 s)
    pub buffer_retry_delay: Duration,

    /// Step applied by the volume up/down commands (default: 0.1)
    pub volume_step: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            tick_interval: Duration::from_millis(500),
            buffer_retry_delay: Duration::from_secs(1),
            volume_step: 0.1,
        }
    }
}
