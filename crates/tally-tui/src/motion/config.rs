//! Transition settings derived from the `[animation]` section

use std::time::Duration;

pub use tally_core::config::AnimationConfig;
pub use tally_core::EasingType;

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Length of a roll or reveal
    fn transition_duration(&self) -> Duration;

    /// Redraw interval while something is moving
    fn frame_duration(&self) -> Duration;

    /// Whether transitions are played at all
    fn is_smooth(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn frame_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.duration_ms > 0
    }
}
