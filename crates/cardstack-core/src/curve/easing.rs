//! L4 Atomic Layer: named transform curves
//!
//! Every curve maps a linear fraction in [0, 1] to an eased fraction in [0, 1],
//! is monotonic, and keeps both endpoints fixed.

use serde::{Deserialize, Serialize};

/// Curve applied to a linear progress fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformCurve {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl TransformCurve {
    /// Apply the curve to a linear fraction
    ///
    /// # Arguments
    /// * `t` - Linear fraction, clamped to [0, 1]
    ///
    /// # Returns
    /// Eased fraction in [0, 1]
    #[inline]
    pub fn compute_from_linear(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TransformCurve::Linear => t,
            TransformCurve::EaseIn => cubic_ease_in(t),
            TransformCurve::EaseOut => cubic_ease_out(t),
            TransformCurve::EaseInOut => cubic_ease_in_out(t),
        }
    }
}

/// Cubic ease-out on a clamped fraction
#[inline]
pub fn ease_out(t: f64) -> f64 {
    TransformCurve::EaseOut.compute_from_linear(t)
}

/// f(t) = t³
#[inline]
fn cubic_ease_in(t: f64) -> f64 {
    t * t * t
}

/// f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}
