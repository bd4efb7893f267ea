//! Player events
//!
//! Event-based communication for UI synchronization. Events accumulate in a
//! pending queue and are drained by the host on its own schedule; none of
//! them expects a response.

use crate::types::PlayerState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the player
///
/// `StateChanged` and `PlayingChanged` fire only when the value actually
/// changed; duplicate sets are swallowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Player state changed
    StateChanged {
        /// The new state
        state: PlayerState,
    },

    /// Buffered (loaded) time advanced
    LoadedTimeChanged {
        /// End of the first buffered range
        loaded: Duration,
        /// Total stream duration
        total: Duration,
    },

    /// Periodic play-head position update
    ///
    /// Hosts suppress rendering of this event while the user drags the
    /// scrub slider; the player keeps emitting regardless.
    PlayTimeChanged {
        /// Current play-head position
        current: Duration,
        /// Total stream duration
        total: Duration,
    },

    /// Playing flag flipped
    PlayingChanged {
        /// Whether playback is running
        playing: bool,
    },

    /// Volume slider moved
    VolumeChanged {
        /// New value in `0.0..=1.0`
        value: f32,
    },

    /// Brightness slider moved
    BrightnessChanged {
        /// New value in `0.0..=1.0`
        value: f32,
    },

    /// Horizontal drag preview; no engine seek has happened yet
    SeekPreview {
        /// Accumulated drag target
        target: Duration,
        /// Total stream duration
        total: Duration,
        /// Whether the last drag step moved forward
        forward: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_for_ui_bridge() {
        let event = PlayerEvent::PlayTimeChanged {
            current: Duration::from_secs(12),
            total: Duration::from_secs(400),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PlayTimeChanged"));

        let back: PlayerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
