//! Stacked card transform engine
//!
//! Turns a card's scroll progress into scale, offset, rotation, opacity,
//! draw order and blur.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `affine` - 2D affine transform builder
//! - `options` - Tunable parameters and their defaults
//! - `style` - Shadow colour and parameters
//! - `transform` - Pure `progress → TransformResult` mapping
//!
//! ## L3 Molecular Layer
//! - `card` - Capability traits implemented by host card types
//! - `engine` - Capability-aware engine that also keeps blur effects in sync
//! - `presets` - Named option sets
//!
//! # Usage
//!
//! ```
//! use cardstack_core::geometry::Size;
//! use cardstack_core::stack::{compute_transform, StackOptions};
//!
//! let options = StackOptions::default();
//! let result = compute_transform(1.0, &options, Size::new(300.0, 400.0));
//! assert_eq!(result.z_order, -1);
//! assert!(result.scale < 1.0);
//! ```

// L4 Atomic Layer
pub mod affine;
pub mod options;
pub mod style;
pub mod transform;

// L3 Molecular Layer
pub mod card;
pub mod engine;
pub mod presets;

pub use affine::AffineTransform;
pub use card::{BlurEffect, StackCard};
pub use engine::{Capabilities, StackTransformEngine};
pub use options::{BlurStyle, StackOptions};
pub use presets::StackPreset;
pub use style::{Rgba, ShadowStyle};
pub use transform::{compute_transform, BlurParams, TransformResult};
