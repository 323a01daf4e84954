//! Progress to transform mapping
//!
//! `compute_transform` is a pure function of `(progress, options, card size)`.
//! The steps below run in a fixed order: later steps read the normalised
//! progress and the scale computed earlier.

use serde::{Deserialize, Serialize};

use super::affine::AffineTransform;
use super::options::{BlurStyle, StackOptions};
use super::style::ShadowStyle;
use crate::curve::{ease_out, Range};
use crate::geometry::{Size, Vec2};

/// Blur to apply to a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurParams {
    pub radius: f64,
    pub style: BlurStyle,
}

/// Everything the renderer needs to draw one card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    /// Translate, scale, then rotate, composed in that order
    pub transform: AffineTransform,
    pub scale: f64,
    pub translation: Vec2,
    /// Rotation in radians
    pub angle: f64,
    pub alpha: f64,
    pub z_order: i32,
    /// `None` when blur is disabled or unsupported
    pub blur: Option<BlurParams>,
    pub shadow: Option<ShadowStyle>,
}

/// Compute the transform for a card at `progress`, assuming blur support
pub fn compute_transform(progress: f64, options: &StackOptions, card_size: Size) -> TransformResult {
    compute(progress, options, card_size, true)
}

pub(crate) fn compute(
    progress: f64,
    options: &StackOptions,
    card_size: Size,
    blur_supported: bool,
) -> TransformResult {
    let p = if options.reverse { -progress } else { progress };

    let shadow = options.shadow_style();
    let (scale, translation) = scale_and_translation(p, options, card_size);
    let alpha = card_alpha(p, options);
    let angle = rotation_angle(p, options);

    let transform = AffineTransform::IDENTITY
        .translated(translation.x, translation.y)
        .scaled(scale, scale)
        .rotated(angle);

    let blur = if blur_supported {
        blur_params(p, options)
    } else {
        None
    };

    TransformResult {
        transform,
        scale,
        translation,
        angle,
        alpha,
        z_order: z_order(progress, options.reverse),
        blur,
        shadow,
    }
}

/// Scale clamped to the optional bounds
pub fn card_scale(p: f64, options: &StackOptions) -> f64 {
    let mut scale = 1.0 - p * options.scale_factor;
    if let Some(min) = options.min_scale {
        scale = scale.max(min);
    }
    if let Some(max) = options.max_scale {
        scale = scale.min(max);
    }
    scale
}

fn scale_and_translation(p: f64, options: &StackOptions, size: Size) -> (f64, Vec2) {
    let scale = card_scale(p, options);
    let stack_position = options.stack_position;

    let stack_progress = Range::new(0.0, options.max_stack_size as f64).interpolate(p);
    let perspective = ease_out(stack_progress) * options.perspective_ratio;

    let spacing = |extent: f64| {
        let spacing = extent * options.spacing_factor;
        match options.max_spacing {
            Some(max) => spacing.min(extent * max),
            None => spacing,
        }
    };
    // Cards behind the focused one move toward `stack_position`
    let depth = -p.max(0.0);
    let translate_x = spacing(size.width) * depth * -stack_position.x;
    let translate_y = spacing(size.height) * depth * -stack_position.y;

    // Keep a shared anchor edge for every card regardless of its scale
    let mut adjust_x = ((scale - 1.0) * size.width / 2.0 + perspective * size.width) * -stack_position.x;
    let mut adjust_y = ((scale - 1.0) * size.height / 2.0 + perspective * size.height) * -stack_position.y;

    if p < 0.0 {
        adjust_x -= size.width * options.pop_offset_ratio.x * p;
        adjust_y -= size.height * options.pop_offset_ratio.y * p;
    }

    (scale, Vec2::new(translate_x + adjust_x, translate_y + adjust_y))
}

/// Opacity for a card at (direction-normalised) progress `p`
pub fn card_alpha(p: f64, options: &StackOptions) -> f64 {
    let last = options.max_stack_size as f64 - 1.0;
    let mut alpha = if p >= last {
        1.0 - Range::new(last, last + options.bottom_stack_alpha_speed_factor).interpolate(p)
    } else if p < 0.0 {
        Range::new(-1.0, -1.0 + options.top_stack_alpha_speed_factor).interpolate(p)
    } else {
        1.0
    };

    if alpha > 0.0 && p >= 0.0 {
        alpha -= p * options.alpha_factor;
    }
    alpha.clamp(0.0, 1.0)
}

/// Rotation in radians for a card at (direction-normalised) progress `p`
pub fn rotation_angle(p: f64, options: &StackOptions) -> f64 {
    if p <= 0.0 {
        let pop = options.pop_angle;
        let angle = Range::new(0.0, pop.abs()).interpolate_out(p.abs());
        return if pop < 0.0 { -angle } else { angle };
    }

    let amplitude = options.stack_rotate_angle;
    // Triangle wave: -A at even integers, +A at odd integers
    let phase = p.rem_euclid(2.0);
    let mut angle = amplitude * (1.0 - 2.0 * (phase - 1.0).abs());

    // Ease the first card in from upright so the angle is continuous at 0
    if p < 1.0 {
        angle += Range::new(0.0, amplitude).interpolate_out(1.0 - p);
    }
    angle
}

/// Draw order: the focused card is 0, cards behind it are negative
///
/// Half-integer progress rounds away from zero. Out-of-range values saturate.
pub fn z_order(progress: f64, reverse: bool) -> i32 {
    let z = (-progress.round()) as i32;
    if reverse {
        z.saturating_neg()
    } else {
        z
    }
}

fn blur_params(p: f64, options: &StackOptions) -> Option<BlurParams> {
    if !options.blur_effect_enabled || options.max_blur_effect_radius <= 0.0 {
        return None;
    }
    let fraction = Range::new(0.0, options.max_stack_size as f64).interpolate(p.max(0.0));
    Some(BlurParams {
        radius: fraction * options.max_blur_effect_radius,
        style: options.blur_effect_style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Size = Size::new(300.0, 400.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identity_at_focus() {
        let result = compute_transform(0.0, &StackOptions::default(), CARD);
        assert_eq!(result.scale, 1.0);
        assert_eq!(result.translation, Vec2::ZERO);
        assert_eq!(result.angle, 0.0);
        assert_eq!(result.alpha, 1.0);
        assert_eq!(result.z_order, 0);
        assert!(result.transform.is_identity());
        assert!(result.blur.is_none());
        assert!(result.shadow.is_none());
    }

    #[test]
    fn test_stacked_card_at_two() {
        let options = StackOptions {
            stack_rotate_angle: 0.1,
            ..Default::default()
        };
        let result = compute_transform(2.0, &options, CARD);

        assert!(close(result.scale, 1.0 - 2.0 * options.scale_factor));
        assert_eq!(result.z_order, -2);
        assert!(close(result.alpha, 1.0 - 2.0 * options.alpha_factor));
        // Even integer sits at the negative peak of the wave
        assert!(close(result.angle, -0.1));

        // Spacing pushes the card down by 2 * 40, re-centering adds another 40
        assert!(close(result.translation.x, 0.0));
        assert!(close(result.translation.y, 120.0));
    }

    #[test]
    fn test_scale_clamp() {
        let options = StackOptions {
            scale_factor: 1.0,
            min_scale: Some(0.5),
            max_scale: Some(1.0),
            ..Default::default()
        };
        assert_eq!(compute_transform(10.0, &options, CARD).scale, 0.5);
        assert_eq!(compute_transform(-10.0, &options, CARD).scale, 1.0);
    }

    #[test]
    fn test_max_spacing_caps_offset() {
        let options = StackOptions {
            spacing_factor: 0.5,
            max_spacing: Some(0.1),
            scale_factor: 0.0,
            ..Default::default()
        };
        let result = compute_transform(1.0, &options, CARD);
        assert!(close(result.translation.y, 40.0));
    }

    #[test]
    fn test_horizontal_stack() {
        let options = StackOptions {
            stack_position: Vec2::new(1.0, 0.0),
            pop_offset_ratio: Vec2::new(-1.45, 0.0),
            ..Default::default()
        };

        // 2 * 30 of spacing toward +x, plus 30 to keep the shrunken card's edge aligned
        let stacked = compute_transform(2.0, &options, CARD);
        assert!(close(stacked.translation.x, 90.0));
        assert!(close(stacked.translation.y, 0.0));

        // Popped card: re-centre by -7.5, then slide 300 * 1.45 * 0.5 to the left
        let popped = compute_transform(-0.5, &options, CARD);
        assert!(close(popped.translation.x, -7.5 - 217.5));
        assert!(close(popped.translation.y, 0.0));
    }

    #[test]
    fn test_stack_offset_follows_position() {
        for (x, y) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
            let options = StackOptions {
                stack_position: Vec2::new(x, y),
                scale_factor: 0.0,
                ..Default::default()
            };
            let t = compute_transform(1.0, &options, CARD).translation;
            assert!(close(t.x, 30.0 * x));
            assert!(close(t.y, 40.0 * y));
        }
    }

    #[test]
    fn test_result_json_shape() {
        let options = StackOptions {
            blur_effect_enabled: true,
            max_blur_effect_radius: 8.0,
            ..Default::default()
        };
        let result = compute_transform(2.0, &options, CARD);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["z_order"], -2);
        assert_eq!(json["blur"]["style"], "light");
        assert_eq!(json["blur"]["radius"], 4.0);
        assert!(json["shadow"].is_null());
        assert_eq!(json["transform"]["a"], json["scale"]);

        let back: TransformResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_perspective_shifts_along_stack() {
        let flat = compute_transform(2.0, &StackOptions::default(), CARD);
        let deep = compute_transform(
            2.0,
            &StackOptions {
                perspective_ratio: 0.1,
                ..Default::default()
            },
            CARD,
        );
        // ease_out(0.5) = 0.875, times 0.1 times height, pushed against stack direction
        assert!(close(deep.translation.y - flat.translation.y, -0.0875 * 400.0));
    }

    #[test]
    fn test_pop_offset_applies_only_below_zero() {
        let options = StackOptions::default();
        let popped = compute_transform(-0.5, &options, CARD);
        // scale 1.05 re-centres by -10, pop adds 400 * -1.45 * 0.5
        assert!(close(popped.translation.y, -10.0 - 290.0));
        assert!(close(popped.translation.x, 0.0));
    }

    #[test]
    fn test_alpha_fade_zones() {
        let options = StackOptions::default();
        // Pop zone fades in from -1 to 0
        assert_eq!(card_alpha(-1.0, &options), 0.0);
        assert!(close(card_alpha(-0.25, &options), 0.75));
        // Tail zone: p = 3 is the start of the fade, already dimmed by 3 * 0.4
        assert_eq!(card_alpha(3.0, &options), 0.0);
        let light = StackOptions {
            alpha_factor: 0.0,
            ..Default::default()
        };
        assert!(close(card_alpha(3.5, &light), 0.5));
        assert_eq!(card_alpha(4.0, &light), 0.0);
    }

    #[test]
    fn test_alpha_never_negative() {
        let options = StackOptions {
            alpha_factor: 2.0,
            ..Default::default()
        };
        assert_eq!(card_alpha(1.0, &options), 0.0);
        assert_eq!(card_alpha(2.5, &options), 0.0);
    }

    #[test]
    fn test_pop_rotation_ramp() {
        let options = StackOptions {
            pop_angle: 0.4,
            ..Default::default()
        };
        assert_eq!(rotation_angle(0.0, &options), 0.0);
        assert!(close(rotation_angle(-0.5, &options), 0.2));
        assert!(close(rotation_angle(-1.0, &options), 0.4));
        assert!(close(rotation_angle(-3.0, &options), 0.4));

        let negative = StackOptions {
            pop_angle: -0.4,
            ..Default::default()
        };
        assert!(close(rotation_angle(-0.5, &negative), -0.2));
    }

    #[test]
    fn test_stack_rotation_wave() {
        let options = StackOptions {
            stack_rotate_angle: 0.2,
            ..Default::default()
        };
        // Continuous across 0 and 1
        assert!(rotation_angle(1e-9, &options).abs() < 1e-6);
        assert!(close(rotation_angle(0.5, &options), 0.1));
        assert!(close(rotation_angle(1.0, &options), 0.2));
        assert!(close(rotation_angle(1.0 - 1e-9, &options), 0.2));
        // Alternates each integer step
        assert!(close(rotation_angle(2.0, &options), -0.2));
        assert!(close(rotation_angle(3.0, &options), 0.2));
        assert!(close(rotation_angle(2.5, &options), 0.0));
    }

    #[test]
    fn test_rotation_composed_after_scale() {
        let options = StackOptions {
            stack_rotate_angle: 0.3,
            ..Default::default()
        };
        let result = compute_transform(1.0, &options, CARD);
        assert_eq!(result.transform.translation(), result.translation);
        let (sin, cos) = result.angle.sin_cos();
        assert!(close(result.transform.a, result.scale * cos));
        assert!(close(result.transform.b, result.scale * sin));
    }

    #[test]
    fn test_z_order_rounding() {
        assert_eq!(z_order(0.49, false), 0);
        assert_eq!(z_order(0.5, false), -1);
        assert_eq!(z_order(-0.5, false), 1);
        assert_eq!(z_order(2.0, true), 2);
        assert_eq!(z_order(1e20, false), i32::MIN);
        assert_eq!(z_order(-1e20, true), i32::MIN + 1);
    }

    #[test]
    fn test_reverse_negates_progress() {
        let options = StackOptions {
            stack_rotate_angle: 0.1,
            pop_angle: 0.3,
            ..Default::default()
        };
        let reversed = StackOptions {
            reverse: true,
            ..options.clone()
        };
        for p in [-0.7, 0.0, 0.4, 1.5, 3.2] {
            let a = compute_transform(p, &reversed, CARD);
            let b = compute_transform(-p, &options, CARD);
            assert_eq!(a.transform, b.transform);
            assert_eq!(a.angle, b.angle);
            assert_eq!(a.alpha, b.alpha);
            assert_eq!(a.z_order, -compute_transform(p, &options, CARD).z_order);
        }
    }

    #[test]
    fn test_blur_radius() {
        let options = StackOptions {
            blur_effect_enabled: true,
            max_blur_effect_radius: 8.0,
            blur_effect_style: BlurStyle::Dark,
            ..Default::default()
        };
        let blur = compute_transform(2.0, &options, CARD).blur.unwrap();
        assert!(close(blur.radius, 4.0));
        assert_eq!(blur.style, BlurStyle::Dark);
        assert_eq!(compute_transform(-1.0, &options, CARD).blur.unwrap().radius, 0.0);
        assert!(compute(2.0, &options, CARD, false).blur.is_none());
    }

    #[test]
    fn test_degenerate_stack_size() {
        let options = StackOptions {
            max_stack_size: 0,
            blur_effect_enabled: true,
            max_blur_effect_radius: 5.0,
            ..Default::default()
        };
        for p in [-2.0, -1.0, -0.5, 0.0, 0.5, 3.0] {
            let result = compute_transform(p, &options, CARD);
            assert!(result.alpha.is_finite());
            assert!(result.translation.x.is_finite() && result.translation.y.is_finite());
            assert!(result.blur.unwrap().radius.is_finite());
        }
    }
}
