//! Contract between the counter and whatever executes its transitions
//!
//! The core never animates anything itself. It commits state immediately and
//! describes the visual change as a [`Transition`]; the runner decides how to
//! play it and replaces an earlier transition on the same element.

use std::time::Duration;

use crate::config::EasingType;
use crate::digit::Roll;
use crate::element::ElementId;

/// Duration proposed for rolls and reveals
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

/// What a layout pass should settle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutScope {
    /// The whole element row
    Counter,
    /// A single tile, pinned at `anchor` before it rolls
    Tile { element: ElementId, anchor: usize },
}

/// Visual change carried by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A tile slides along its strip
    Roll(Roll),
    /// Hidden elements become visible; `relayout` means elements were also
    /// removed so the row re-flows inside the same transition
    Reveal {
        elements: Vec<ElementId>,
        relayout: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: EasingType,
    pub effect: Effect,
}

impl Transition {
    /// Transition with the default duration and ease-in-ease-out
    pub fn new(effect: Effect) -> Self {
        Self {
            duration: TRANSITION_DURATION,
            easing: EasingType::EaseInOut,
            effect,
        }
    }
}

/// Executes layout passes and timed transitions; fire-and-forget
pub trait AnimationRunner {
    fn layout_pass(&mut self, scope: LayoutScope);

    fn run_transition(&mut self, transition: Transition);
}

/// Runner that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRunner;

impl AnimationRunner for NoopRunner {
    fn layout_pass(&mut self, _scope: LayoutScope) {}

    fn run_transition(&mut self, _transition: Transition) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerEvent {
    Layout(LayoutScope),
    Transition(Transition),
}

/// Runner that keeps every request in order
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    events: Vec<RunnerEvent>,
}

impl RecordingRunner {
    pub fn events(&self) -> &[RunnerEvent] {
        &self.events
    }

    /// Remove and return everything recorded so far
    pub fn take(&mut self) -> Vec<RunnerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn rolls(&self) -> impl Iterator<Item = &Roll> {
        self.events.iter().filter_map(|event| match event {
            RunnerEvent::Transition(Transition {
                effect: Effect::Roll(roll),
                ..
            }) => Some(roll),
            _ => None,
        })
    }

    /// `(elements, relayout)` of each reveal transition
    pub fn reveals(&self) -> impl Iterator<Item = (&[ElementId], bool)> {
        self.events.iter().filter_map(|event| match event {
            RunnerEvent::Transition(Transition {
                effect: Effect::Reveal { elements, relayout },
                ..
            }) => Some((elements.as_slice(), *relayout)),
            _ => None,
        })
    }
}

impl AnimationRunner for RecordingRunner {
    fn layout_pass(&mut self, scope: LayoutScope) {
        self.events.push(RunnerEvent::Layout(scope));
    }

    fn run_transition(&mut self, transition: Transition) {
        self.events.push(RunnerEvent::Transition(transition));
    }
}
