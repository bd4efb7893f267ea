//! Scrub/drag coordinator
//!
//! Converts a continuous directional drag into either a clamped seek target
//! (horizontal) or volume/brightness nudges (vertical). State lives for one
//! gesture: created on begin, mutated on change, consumed on end.

use crate::types::PanDirection;

/// Transient state of a drag gesture
#[derive(Debug, Clone)]
pub(crate) struct ScrubCoordinator {
    direction: PanDirection,
    /// Accumulated drag target in seconds, seeded with the drag baseline
    drag_time: f64,
    /// Decided once per gesture from the initial touch location
    volume_region: bool,
    active: bool,
}

impl ScrubCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            direction: PanDirection::Horizontal,
            drag_time: 0.0,
            volume_region: false,
            active: false,
        }
    }

    /// Start a gesture
    ///
    /// `|vx| > |vy|` picks horizontal scrubbing and snapshots the play-head
    /// as the drag baseline; otherwise the touch's x position against the
    /// view midpoint picks volume (right half) or brightness (left half).
    pub(crate) fn begin(
        &mut self,
        velocity_x: f64,
        velocity_y: f64,
        location_x: f64,
        view_width: f64,
        baseline_secs: f64,
    ) {
        if velocity_x.abs() > velocity_y.abs() {
            self.direction = PanDirection::Horizontal;
            self.drag_time = baseline_secs;
        } else {
            self.direction = PanDirection::Vertical;
            self.volume_region = location_x > view_width / 2.0;
        }
        self.active = true;
    }

    /// Accumulate one horizontal drag step; returns the clamped target
    ///
    /// The step is velocity-scaled and duration-scaled: faster or longer
    /// drags move further on longer streams.
    pub(crate) fn step_horizontal(&mut self, velocity_x: f64, total_secs: f64) -> f64 {
        self.drag_time += velocity_x / 100.0 * (total_secs / 400.0);
        self.drag_time = self.drag_time.clamp(0.0, total_secs);
        self.drag_time
    }

    /// End the gesture, yielding the accumulated target in seconds
    pub(crate) fn finish(&mut self) -> f64 {
        let target = self.drag_time;
        self.reset();
        target
    }

    pub(crate) fn reset(&mut self) {
        self.drag_time = 0.0;
        self.volume_region = false;
        self.active = false;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn direction(&self) -> PanDirection {
        self.direction
    }

    pub(crate) fn is_volume_region(&self) -> bool {
        self.volume_region
    }
}
