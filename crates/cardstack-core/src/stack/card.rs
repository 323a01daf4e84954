//! Capability traits a host card type implements to be driven by the engine

use super::options::{BlurStyle, StackOptions};
use crate::geometry::Size;

/// A blur effect attached to a card's view hierarchy
pub trait BlurEffect {
    /// Set the blur radius and style. Called on every transform update.
    fn apply(&mut self, radius: f64, style: BlurStyle);
}

/// A card the stack transform engine can drive
///
/// The host owns the card and its blur effect slot. The engine only reads the
/// options and size, and fills the slot lazily the first time a non-zero blur
/// is needed.
pub trait StackCard {
    type Blur: BlurEffect;

    fn options(&self) -> &StackOptions;

    /// Current bounds of the card surface
    fn card_size(&self) -> Size;

    /// Slot holding the card's blur effect, `None` until one is created
    fn blur_effect(&mut self) -> &mut Option<Self::Blur>;

    /// Build a new blur effect for this card
    fn create_blur_effect(&self, style: BlurStyle) -> Self::Blur;
}
