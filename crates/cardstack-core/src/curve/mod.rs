//! Scalar remapping used by the stack transform engine
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `range` - Clamped linear mapping into and out of a `[min, max]` range
//! - `easing` - Named transform curves (linear, ease-in, ease-out, ease-in-out)
//!
//! Both layers are pure: every input is clamped, nothing here can fail.
//!
//! # Usage
//!
//! ```
//! use cardstack_core::curve::{Range, TransformCurve};
//!
//! let depth = Range::new(0.0, 4.0).interpolate(2.0);
//! assert_eq!(depth, 0.5);
//!
//! let eased = TransformCurve::EaseOut.compute_from_linear(depth);
//! assert!(eased > depth);
//! ```

pub mod easing;
pub mod range;

pub use easing::{ease_out, TransformCurve};
pub use range::{interpolate, interpolate_out, Range};
