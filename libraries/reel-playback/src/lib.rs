//! Reel Player - Playback Control
//!
//! Platform-agnostic playback control for Reel Player.
//!
//! This crate provides:
//! - The playback state machine (ready/buffering/ended/error arbitration)
//! - Readiness-gated seeking with single-slot pending requests
//! - A debounced buffer-empty retry loop with auto-resume
//! - A command facade for host UIs (play, pause, seek, replay)
//! - Scrub/drag coordination (horizontal seek, vertical volume/brightness)
//! - A periodic play-time sampler driven by host ticks
//!
//! # Architecture
//!
//! `reel-playback` is completely platform-agnostic:
//! - No dependency on any media framework
//! - No timers or threads of its own; the host drives time via `tick`
//! - The decode/render pipeline is provided via the [`MediaEngine`] trait
//!
//! Everything runs on a single control context. The engine's notification
//! stream is delivered in emission order through
//! [`Player::handle_notification`]; outbound [`PlayerEvent`]s accumulate
//! until the host drains them.
//!
//! # Example
//!
//! ```rust,no_run
//! use reel_playback::{
//!     MediaEngine, MediaResource, Player, PlayerConfig, Result,
//! };
//! use std::time::{Duration, Instant};
//!
//! // Implement MediaEngine for your platform pipeline
//! struct MyEngine;
//!
//! impl MediaEngine for MyEngine {
//!     fn load(&mut self, _resource: &MediaResource) -> Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) {}
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _target: Duration) {}
//!     fn current_time(&self) -> Duration {
//!         Duration::ZERO
//!     }
//!     fn duration(&self) -> Option<Duration> {
//!         Some(Duration::from_secs(400))
//!     }
//!     fn rate(&self) -> f32 {
//!         1.0
//!     }
//!     fn likely_to_keep_up(&self) -> bool {
//!         true
//!     }
//!     fn buffer_full(&self) -> bool {
//!         false
//!     }
//!     fn playback_error(&self) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let mut player = Player::new(Box::new(MyEngine), PlayerConfig::default());
//! let now = Instant::now();
//!
//! player.set_media(MediaResource::new("https://example.com/clip.mp4"), now)?;
//! player.seek(30.0, None, now)?;
//!
//! // Host loop: forward engine notifications, tick every ~100 ms, render events
//! player.tick(now);
//! for event in player.drain_events() {
//!     println!("{event:?}");
//! }
//! # Ok::<(), reel_playback::PlayerError>(())
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod player;
mod sampler;
mod scrub;
mod session;
pub mod types;
mod volume;

// Public exports
pub use engine::{EngineNotification, MediaEngine};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use session::SeekCompletion;
pub use types::{PanDirection, PlayerConfig, PlayerState};
pub use volume::LevelSlider;

// Re-export the core domain types hosts need alongside the player
pub use reel_core::{format_clock, MediaResource, TimeRange};
