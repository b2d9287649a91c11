//! Progress and interpolation helpers for transitions

use std::time::{Duration, Instant};

/// Progress in `[0, 1]` of a transition started at `start`, observed at `now`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 9.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(9.0, 0.0, 0.5) - 4.5).abs() < 0.001);
        assert!((lerp(0.0, 9.0, 1.0) - 9.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let duration = Duration::from_millis(500);
        assert_eq!(progress(start, duration, start), 0.0);
        let half = progress(start, duration, start + Duration::from_millis(250));
        assert!((half - 0.5).abs() < 0.001);
        assert_eq!(progress(start, duration, start + Duration::from_secs(2)), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
        assert!(is_complete(start, Duration::ZERO, start));
    }

    #[test]
    fn test_observed_before_start() {
        let now = Instant::now();
        let start = now + Duration::from_millis(10);
        assert_eq!(progress(start, Duration::from_millis(100), now), 0.0);
        assert!(!is_complete(start, Duration::from_millis(100), now));
    }
}
