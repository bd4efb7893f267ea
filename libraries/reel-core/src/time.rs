//! Time display helpers

use std::time::Duration;

/// Format a duration as a `mm:ss` clock string
///
/// Minutes widen to three digits past 100 so long streams keep a stable
/// label width (`101:05` rather than wrapping).
pub fn format_clock(time: Duration) -> String {
    let total = time.as_secs();
    let min = total / 60;
    let sec = total % 60;
    if min > 100 {
        format!("{min:03}:{sec:02}")
    } else {
        format!("{min:02}:{sec:02}")
    }
}
