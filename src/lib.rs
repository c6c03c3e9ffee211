//! Glint: an ambient page-effects runtime.
//!
//! Umbrella crate re-exporting the workspace surface:
//! - [`glint_motion`]: easing, interpolation and the tween engine
//! - [`glint_stage`]: the stage model, selector queries, scroll trigger,
//!   particle field and painter seam
//! - [`glint_config`]: immutable startup content configuration

pub use glint_config as config;
pub use glint_motion as motion;
pub use glint_stage as stage;

pub use glint_config::ContentConfig;
pub use glint_motion::{EasingFunction, Target, TweenEngine, TweenEvent, TweenId, TweenSpec};
pub use glint_stage::{
    DisplayListPainter, NodeId, ObserveSpec, Painter, ParticleField, Rect, ScrollTrigger, Stage,
    StageNode,
};
