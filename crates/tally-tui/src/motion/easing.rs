//! Easing curves mapping progress in `[0, 1]` onto `[0, 1]`

pub use tally_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Eased value for progress `t`, clamped to `[0, 1]`
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::EaseInOut => cubic_ease_in_out(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-in-out: slow start, fast middle, slow finish
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

/// f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
