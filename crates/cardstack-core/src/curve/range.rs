//! L4 Atomic Layer: clamped linear interpolation over a `[min, max]` range

use serde::{Deserialize, Serialize};

/// A `(min, max)` pair used both as an input domain and as an output range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Unit range `[0, 1]`
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the range (may be zero)
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` from this range onto `[0, 1]`, clamped at both ends
    ///
    /// A zero-width range acts as a step at `min`: values below it give 0,
    /// everything else gives 1.
    #[inline]
    pub fn interpolate(&self, value: f64) -> f64 {
        let length = self.length();
        if length == 0.0 {
            return if value < self.min { 0.0 } else { 1.0 };
        }
        ((value - self.min) / length).clamp(0.0, 1.0)
    }

    /// Map a fraction in `[0, 1]` onto this range
    ///
    /// The fraction is clamped first, so the result always lies between
    /// `min` and `max`. `interpolate_out(0) == min`, `interpolate_out(1) == max`.
    #[inline]
    pub fn interpolate_out(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        self.min + self.length() * t
    }

    /// Map `value` from this range onto `out`
    #[inline]
    pub fn remap(&self, value: f64, out: Range) -> f64 {
        out.interpolate_out(self.interpolate(value))
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Free-function form of [`Range::interpolate`]
#[inline]
pub fn interpolate(value: f64, domain: impl Into<Range>) -> f64 {
    domain.into().interpolate(value)
}

/// Free-function form of [`Range::interpolate_out`]
#[inline]
pub fn interpolate_out(fraction: f64, range: impl Into<Range>) -> f64 {
    range.into().interpolate_out(fraction)
}
