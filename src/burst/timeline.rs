//! Pure time-to-value curves for the burst.
//!
//! Every animated value in a burst is a function of the time elapsed since
//! release, so the renderer can sample it at any frame without keeping
//! per-frame state.

use crate::constants::FLASH_DURATION;
use std::time::Duration;

/// Ease-in-out (quadratic). Monotonic on [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Normalized, eased progress of a `duration`-long tween that starts after `delay`.
pub fn progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    ease_in_out(active.as_secs_f32() / duration.as_secs_f32())
}

/// Piecewise-linear interpolation through keyframe `stops`, clamped at both ends.
///
/// `stops` must be ascending and the same length as `values`.
pub fn interpolate(stops: &[f32], values: &[f32], x: f32) -> f32 {
    debug_assert_eq!(stops.len(), values.len());
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if x <= first {
        return values[0];
    }
    if x >= last {
        return values[values.len() - 1];
    }

    for i in 1..stops.len() {
        if x <= stops[i] {
            let span = stops[i] - stops[i - 1];
            let local = if span > 0.0 { (x - stops[i - 1]) / span } else { 1.0 };
            return values[i - 1] + (values[i] - values[i - 1]) * local;
        }
    }
    values[values.len() - 1]
}

/// Flash overlay opacity: 1 at release, fading to 0 over the flash window.
pub fn flash_opacity(elapsed: Duration) -> f32 {
    1.0 - progress(elapsed, Duration::ZERO, FLASH_DURATION)
}
