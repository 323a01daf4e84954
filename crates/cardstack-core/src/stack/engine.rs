//! L3 Molecular Layer: engine bound to platform capabilities
//!
//! Wraps the pure transform with the one stateful step: keeping a card's blur
//! effect in sync with the computed radius.

use serde::{Deserialize, Serialize};

use super::card::{BlurEffect, StackCard};
use super::options::StackOptions;
use super::transform::{compute, TransformResult};
use crate::geometry::Size;

/// Host platform features, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub blur_supported: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            blur_supported: true,
        }
    }
}

/// Stateless transform engine
///
/// Safe to share across threads; each call only reads its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackTransformEngine {
    capabilities: Capabilities,
}

impl StackTransformEngine {
    pub fn new(capabilities: Capabilities) -> Self {
        tracing::debug!(
            "Stack transform engine created (blur supported: {})",
            capabilities.blur_supported
        );
        Self { capabilities }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Compute the transform for `progress` without touching any card
    pub fn compute(&self, progress: f64, options: &StackOptions, card_size: Size) -> TransformResult {
        compute(progress, options, card_size, self.capabilities.blur_supported)
    }

    /// Compute the transform for `card` and sync its blur effect
    ///
    /// An existing blur effect is always reused. A new one is only created
    /// when blur is active and the radius is non-zero. When blur is
    /// disabled or unsupported no effect is created, and an already attached
    /// one is reset to radius 0.
    pub fn apply<C: StackCard>(&self, card: &mut C, progress: f64) -> TransformResult {
        let result = self.compute(progress, card.options(), card.card_size());

        match result.blur {
            Some(blur) => {
                if card.blur_effect().is_none() && blur.radius > 0.0 {
                    let effect = card.create_blur_effect(blur.style);
                    tracing::trace!("Attached blur effect (style: {:?})", blur.style);
                    *card.blur_effect() = Some(effect);
                }
                if let Some(effect) = card.blur_effect().as_mut() {
                    effect.apply(blur.radius, blur.style);
                }
            }
            None => {
                let style = card.options().blur_effect_style;
                if let Some(effect) = card.blur_effect().as_mut() {
                    effect.apply(0.0, style);
                }
            }
        }

        result
    }
}
