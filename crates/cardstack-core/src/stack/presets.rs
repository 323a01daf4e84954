//! Named option sets for common stack looks

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::options::{BlurStyle, StackOptions};
use crate::geometry::Vec2;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackPreset {
    /// Cards recede into depth without spreading apart
    Perspective,
    /// Gentle alternating tilt, popped card swings away
    Tilt,
    /// Strong rotation with a fast fade
    Vortex,
    /// Horizontal stack that rotates as cards are popped sideways
    Rotary,
    /// Cards behind the focused one blur out
    Blur,
    /// Steep fade with wide spacing
    Transparent,
}

impl StackPreset {
    pub const ALL: [StackPreset; 6] = [
        StackPreset::Perspective,
        StackPreset::Tilt,
        StackPreset::Vortex,
        StackPreset::Rotary,
        StackPreset::Blur,
        StackPreset::Transparent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StackPreset::Perspective => "perspective",
            StackPreset::Tilt => "tilt",
            StackPreset::Vortex => "vortex",
            StackPreset::Rotary => "rotary",
            StackPreset::Blur => "blur",
            StackPreset::Transparent => "transparent",
        }
    }

    pub fn options(&self) -> StackOptions {
        let base = StackOptions::default();
        match self {
            StackPreset::Perspective => StackOptions {
                scale_factor: 0.12,
                spacing_factor: 0.0,
                perspective_ratio: 0.1,
                max_stack_size: 5,
                alpha_factor: 0.15,
                ..base
            },
            StackPreset::Tilt => StackOptions {
                spacing_factor: 0.03,
                stack_rotate_angle: PI / 45.0,
                pop_angle: PI / 12.0,
                alpha_factor: 0.2,
                ..base
            },
            StackPreset::Vortex => StackOptions {
                scale_factor: 0.15,
                spacing_factor: 0.0,
                stack_rotate_angle: PI / 9.0,
                pop_angle: -PI / 6.0,
                alpha_factor: 0.5,
                ..base
            },
            StackPreset::Rotary => StackOptions {
                stack_position: Vec2::new(1.0, 0.0),
                pop_offset_ratio: Vec2::new(-1.45, 0.0),
                stack_rotate_angle: PI / 30.0,
                pop_angle: -PI / 4.0,
                spacing_factor: 0.05,
                ..base
            },
            StackPreset::Blur => StackOptions {
                spacing_factor: 0.05,
                alpha_factor: 0.1,
                blur_effect_enabled: true,
                max_blur_effect_radius: 6.0,
                blur_effect_style: BlurStyle::Light,
                ..base
            },
            StackPreset::Transparent => StackOptions {
                spacing_factor: 0.2,
                max_spacing: Some(0.15),
                alpha_factor: 0.6,
                bottom_stack_alpha_speed_factor: 0.5,
                ..base
            },
        }
    }
}

impl fmt::Display for StackPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StackPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
