//! Terminal playback of counter transitions
//!
//! The core hands over rolls and reveals as data. This module times them
//! against the wall clock so widgets can ask where a tile currently is.
//!
//! - `easing`: easing curves over `[0, 1]`
//! - `timing`: progress and interpolation helpers
//! - `config`: duration and frame rate derived from `[animation]`
//! - `board`: the [`TransitionBoard`] runner the counter drives

pub mod config;
pub mod easing;
pub mod timing;

pub mod board;

pub use board::TransitionBoard;
pub use config::{AnimationConfig, AnimationConfigExt};
pub use easing::{EasingType, EasingTypeExt};
