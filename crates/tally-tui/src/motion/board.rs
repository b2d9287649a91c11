//! Transition runner backed by the wall clock
//!
//! Combines easing and timing to keep track of every roll and reveal the
//! counter requested. A new transition on an element replaces the one in
//! flight; a layout pass on a tile snaps it to its start slot first.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tally_core::{AnimationRunner, Effect, ElementId, LayoutScope, Roll, Transition};
use tracing::trace;

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy)]
struct Timing {
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Timing {
    fn eased(&self, now: Instant) -> f64 {
        self.easing.apply(progress(self.start, self.duration, now))
    }

    fn is_complete(&self, now: Instant) -> bool {
        is_complete(self.start, self.duration, now)
    }
}

#[derive(Debug, Clone)]
struct ActiveRoll {
    timing: Timing,
    roll: Roll,
}

/// Plays counter transitions
///
/// Duration and easing come from the `[animation]` config rather than the
/// values proposed by the counter, so users can slow things down or switch
/// curves. With a zero duration transitions are dropped and the row simply
/// shows the committed state.
#[derive(Debug, Clone)]
pub struct TransitionBoard {
    config: AnimationConfig,
    rolls: HashMap<ElementId, ActiveRoll>,
    reveals: HashMap<ElementId, Timing>,
    reflow: Option<Timing>,
}

impl Default for TransitionBoard {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl TransitionBoard {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            rolls: HashMap::new(),
            reveals: HashMap::new(),
            reflow: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Whether anything is still moving
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.rolls.is_empty() || !self.reveals.is_empty() || self.reflow.is_some()
    }

    /// Number of tiles currently rolling
    pub fn active_rolls(&self) -> usize {
        self.rolls.len()
    }

    /// Drop finished transitions; returns whether anything is still moving
    pub fn update(&mut self, now: Instant) -> bool {
        self.rolls.retain(|_, active| !active.timing.is_complete(now));
        self.reveals.retain(|_, timing| !timing.is_complete(now));
        if self.reflow.is_some_and(|timing| timing.is_complete(now)) {
            self.reflow = None;
        }
        self.is_animating()
    }

    /// Forget transitions of elements that no longer exist
    pub fn prune(&mut self, destroyed: &[ElementId]) {
        for id in destroyed {
            self.rolls.remove(id);
            self.reveals.remove(id);
        }
    }

    /// Fractional strip slot of a rolling tile
    pub fn tile_position(&self, id: ElementId, now: Instant) -> Option<f64> {
        self.rolls.get(&id).map(|active| {
            let t = active.timing.eased(now);
            lerp(active.roll.from_slot as f64, active.roll.to_slot as f64, t)
        })
    }

    /// Glyph currently in a rolling tile's window
    pub fn rolling_glyph(&self, id: ElementId, now: Instant) -> Option<&str> {
        let position = self.tile_position(id, now)?;
        let active = self.rolls.get(&id)?;
        let slot = (position.round() as usize).min(active.roll.strip.len().saturating_sub(1));
        active.roll.strip.get(slot).map(String::as_str)
    }

    /// Fade-in progress of a newly revealed element
    pub fn reveal_progress(&self, id: ElementId, now: Instant) -> Option<f64> {
        self.reveals.get(&id).map(|timing| timing.eased(now))
    }

    /// Progress of the row closing up after elements were removed
    pub fn reflow_progress(&self, now: Instant) -> Option<f64> {
        self.reflow.map(|timing| timing.eased(now))
    }

    fn timing(&self) -> Timing {
        Timing {
            start: Instant::now(),
            duration: self.config.transition_duration(),
            easing: self.config.easing,
        }
    }
}

impl AnimationRunner for TransitionBoard {
    fn layout_pass(&mut self, scope: LayoutScope) {
        match scope {
            LayoutScope::Tile { element, anchor } => {
                if self.rolls.remove(&element).is_some() {
                    trace!("Roll on {} interrupted, pinned at slot {}", element, anchor);
                }
            }
            LayoutScope::Counter => {
                self.reveals.clear();
                self.reflow = None;
            }
        }
    }

    fn run_transition(&mut self, transition: Transition) {
        if !self.config.is_smooth() {
            return;
        }

        let timing = self.timing();
        match transition.effect {
            Effect::Roll(roll) => {
                self.rolls.insert(roll.element, ActiveRoll { timing, roll });
            }
            Effect::Reveal { elements, relayout } => {
                for id in elements {
                    self.reveals.insert(id, timing);
                }
                if relayout {
                    self.reflow = Some(timing);
                }
            }
        }
    }
}
