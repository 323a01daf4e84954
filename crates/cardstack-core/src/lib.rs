pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod stack;

pub use config::AppConfig;
pub use curve::{Range, TransformCurve};
pub use error::{Error, Result};
pub use geometry::{Size, Vec2};
pub use stack::{
    compute_transform, Capabilities, StackCard, StackOptions, StackPreset, StackTransformEngine,
    TransformResult,
};
