//! Tween engine for the Glint effects runtime.
//!
//! This crate provides:
//! - **Easing Functions**: the web-style timing curves the page uses
//! - **Interpolation**: linear lerp with extrapolation for overshoot curves
//! - **Tween Descriptors**: per-call property-change specifications with
//!   duration, delay, stagger and completion callbacks
//! - **Tween Engine**: an explicit engine instance that owns every active
//!   tween behind a stable handle and advances them from a caller-driven
//!   frame clock
//!
//! # Architecture
//!
//! ```text
//! TweenEngine
//!   ├── animate(stage, target, spec) → Vec<TweenId>   (registration only)
//!   └── update(stage, delta_ms)                       (per-frame advance)
//!         ├── writes node styles (opacity, composed transform string)
//!         ├── queues TweenEvent::{Started, Finished}
//!         └── invokes per-tween completion callbacks exactly once
//! ```
//!
//! The engine never reads wall-clock time; callers feed frame deltas, so
//! tests advance animation deterministically.

pub mod easing;
pub mod engine;
pub mod events;
pub mod interpolate;
pub mod transform;
pub mod tween;

pub use easing::EasingFunction;
pub use engine::TweenEngine;
pub use events::{EventQueue, TweenEvent};
pub use interpolate::Interpolate;
pub use transform::TransformParts;
pub use tween::{Target, TweenId, TweenSpec, TweenState};
