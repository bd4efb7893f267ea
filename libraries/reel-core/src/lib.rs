//! Reel Player Core
//!
//! Shared domain types for Reel Player.
//!
//! This crate provides the building blocks used by every platform bridge:
//! - **Domain Types**: [`MediaResource`], [`TimeRange`]
//! - **Display Helpers**: [`format_clock`] for HUD/label rendering
//!
//! The playback state machine itself lives in `reel-playback`; this crate
//! carries only what a host UI or engine bridge needs to describe media.

#![forbid(unsafe_code)]

pub mod time;
pub mod types;

pub use time::format_clock;
pub use types::{MediaResource, TimeRange};
