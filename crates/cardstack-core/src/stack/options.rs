//! Tunable parameters for the stack transform
//!
//! Every field has a serde default so a config file only needs to name
//! the values it changes.

use serde::{Deserialize, Serialize};

use super::style::{Rgba, ShadowStyle};
use crate::geometry::Vec2;
use crate::{Error, Result};

/// Visual style tag passed through to the blur sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurStyle {
    ExtraLight,
    #[default]
    Light,
    Dark,
    Regular,
    Prominent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackOptions {
    /// Scale lost per unit of progress
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Lower clamp on the computed scale
    #[serde(default)]
    pub min_scale: Option<f64>,
    /// Upper clamp on the computed scale
    #[serde(default)]
    pub max_scale: Option<f64>,
    /// Offset per unit of progress, as a fraction of the card size
    #[serde(default = "default_spacing_factor")]
    pub spacing_factor: f64,
    /// Cap on the spacing, as a fraction of the card size
    #[serde(default)]
    pub max_spacing: Option<f64>,
    /// Unit vector the stack grows toward
    #[serde(default = "default_stack_position")]
    pub stack_position: Vec2,
    /// Strength of the eased depth shift
    #[serde(default)]
    pub perspective_ratio: f64,
    /// Cards drawn distinctly before the back fade zone
    #[serde(default = "default_max_stack_size")]
    pub max_stack_size: u32,
    /// Extra offset for a popped card, in card sizes per unit of progress
    #[serde(default = "default_pop_offset_ratio")]
    pub pop_offset_ratio: Vec2,
    /// Rotation (radians) of a card popped to progress -1
    #[serde(default)]
    pub pop_angle: f64,
    /// Magnitude (radians) of the stacked-card rotation wave
    #[serde(default)]
    pub stack_rotate_angle: f64,
    /// Alpha lost per unit of progress behind the focused card
    #[serde(default = "default_alpha_factor")]
    pub alpha_factor: f64,
    /// Width of the fade-in window starting at progress -1
    #[serde(default = "default_alpha_speed_factor")]
    pub top_stack_alpha_speed_factor: f64,
    /// Width of the fade-out window starting at `max_stack_size - 1`
    #[serde(default = "default_alpha_speed_factor")]
    pub bottom_stack_alpha_speed_factor: f64,
    /// Invert the stack direction
    #[serde(default)]
    pub reverse: bool,

    #[serde(default)]
    pub shadow_enabled: bool,
    #[serde(default = "default_shadow_color")]
    pub shadow_color: Rgba,
    #[serde(default = "default_shadow_offset")]
    pub shadow_offset: Vec2,
    #[serde(default = "default_shadow_radius")]
    pub shadow_radius: f64,
    #[serde(default = "default_shadow_opacity")]
    pub shadow_opacity: f64,

    #[serde(default)]
    pub blur_effect_enabled: bool,
    #[serde(default)]
    pub max_blur_effect_radius: f64,
    #[serde(default)]
    pub blur_effect_style: BlurStyle,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            min_scale: None,
            max_scale: None,
            spacing_factor: default_spacing_factor(),
            max_spacing: None,
            stack_position: default_stack_position(),
            perspective_ratio: 0.0,
            max_stack_size: default_max_stack_size(),
            pop_offset_ratio: default_pop_offset_ratio(),
            pop_angle: 0.0,
            stack_rotate_angle: 0.0,
            alpha_factor: default_alpha_factor(),
            top_stack_alpha_speed_factor: default_alpha_speed_factor(),
            bottom_stack_alpha_speed_factor: default_alpha_speed_factor(),
            reverse: false,
            shadow_enabled: false,
            shadow_color: default_shadow_color(),
            shadow_offset: default_shadow_offset(),
            shadow_radius: default_shadow_radius(),
            shadow_opacity: default_shadow_opacity(),
            blur_effect_enabled: false,
            max_blur_effect_radius: 0.0,
            blur_effect_style: BlurStyle::default(),
        }
    }
}

fn default_scale_factor() -> f64 {
    0.1
}

fn default_spacing_factor() -> f64 {
    0.1
}

fn default_stack_position() -> Vec2 {
    Vec2::new(0.0, 1.0)
}

fn default_max_stack_size() -> u32 {
    4
}

fn default_pop_offset_ratio() -> Vec2 {
    // Slide the popped card up and off the top edge
    Vec2::new(0.0, -1.45)
}

fn default_alpha_factor() -> f64 {
    0.4
}

fn default_alpha_speed_factor() -> f64 {
    1.0
}

fn default_shadow_color() -> Rgba {
    Rgba::BLACK
}

fn default_shadow_offset() -> Vec2 {
    Vec2::new(0.0, 3.0)
}

fn default_shadow_radius() -> f64 {
    10.0
}

fn default_shadow_opacity() -> f64 {
    0.3
}

impl StackOptions {
    /// Shadow parameters, or `None` when shadows are disabled
    pub fn shadow_style(&self) -> Option<ShadowStyle> {
        self.shadow_enabled.then(|| ShadowStyle {
            color: self.shadow_color,
            offset: self.shadow_offset,
            radius: self.shadow_radius,
            opacity: self.shadow_opacity,
        })
    }

    /// Reject values the engine would turn into NaN or nonsense
    ///
    /// The transform itself never calls this; it is for config loading.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("scale_factor", self.scale_factor),
            ("spacing_factor", self.spacing_factor),
            ("stack_position.x", self.stack_position.x),
            ("stack_position.y", self.stack_position.y),
            ("perspective_ratio", self.perspective_ratio),
            ("pop_offset_ratio.x", self.pop_offset_ratio.x),
            ("pop_offset_ratio.y", self.pop_offset_ratio.y),
            ("pop_angle", self.pop_angle),
            ("stack_rotate_angle", self.stack_rotate_angle),
            ("alpha_factor", self.alpha_factor),
            ("top_stack_alpha_speed_factor", self.top_stack_alpha_speed_factor),
            ("bottom_stack_alpha_speed_factor", self.bottom_stack_alpha_speed_factor),
            ("max_blur_effect_radius", self.max_blur_effect_radius),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Config(format!("{} must be a finite number", name)));
        }

        if let (Some(min), Some(max)) = (self.min_scale, self.max_scale) {
            if min > max {
                return Err(Error::Config(format!(
                    "min_scale ({}) is greater than max_scale ({})",
                    min, max
                )));
            }
        }
        if self.top_stack_alpha_speed_factor < 0.0 || self.bottom_stack_alpha_speed_factor < 0.0 {
            return Err(Error::Config("alpha speed factors must not be negative".to_string()));
        }
        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(Error::Config(format!(
                "shadow_opacity ({}) must be within 0..=1",
                self.shadow_opacity
            )));
        }
        Ok(())
    }
}
