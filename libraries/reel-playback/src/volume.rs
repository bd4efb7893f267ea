//! Volume and brightness sliders
//!
//! Both controls share the same clamped `0.0..=1.0` slider model; the drag
//! coordinator and the step commands nudge them by small deltas.

/// Clamped slider-style level control
#[derive(Debug, Clone)]
pub struct LevelSlider {
    value: f32,
}

impl LevelSlider {
    /// Create a slider at the given value, clamped to `0.0..=1.0`
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set an absolute value, clamped
    ///
    /// Returns true if the stored value actually moved.
    pub fn set(&mut self, value: f32) -> bool {
        let clamped = value.clamp(0.0, 1.0);
        if (clamped - self.value).abs() < f32::EPSILON {
            return false;
        }
        self.value = clamped;
        true
    }

    /// Apply a signed delta, clamped
    ///
    /// Returns true if the stored value actually moved.
    pub fn nudge(&mut self, delta: f32) -> bool {
        self.set(self.value + delta)
    }
}

impl Default for LevelSlider {
    fn default() -> Self {
        Self::new(0.5)
    }
}
