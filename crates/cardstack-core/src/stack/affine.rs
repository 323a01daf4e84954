//! 2D affine transform with the composition order used by card views
//!
//! The transform maps a point `p` to `M·p + t`. The `translated`, `scaled`
//! and `rotated` builders append an operation in the card's local space, so
//! `identity.translated(..).scaled(..)` translates in pre-scale coordinates.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Append a translation in local coordinates
    #[must_use]
    pub fn translated(self, x: f64, y: f64) -> Self {
        Self {
            tx: self.tx + self.a * x + self.c * y,
            ty: self.ty + self.b * x + self.d * y,
            ..self
        }
    }

    /// Append a scale in local coordinates
    #[must_use]
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self {
            a: self.a * sx,
            b: self.b * sx,
            c: self.c * sy,
            d: self.d * sy,
            ..self
        }
    }

    /// Append a rotation (radians) in local coordinates
    #[must_use]
    pub fn rotated(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    /// Map a point through the transform
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
