//! Stage model for the Glint effects runtime.
//!
//! This crate provides the retained scene ("stage") that the effect layers
//! act on:
//! - **Nodes**: styled elements with classes, attributes and a layout rect
//! - **Selectors**: a small CSS-subset query engine for locating nodes
//! - **Scroll Trigger**: viewport-visibility observation with enter/leave
//!   callbacks
//! - **Particle Field**: the drifting connected-particle background
//! - **Painter**: the drawing seam used by the particle field, with a
//!   display-list recorder for headless runs and tests
//!
//! # Architecture
//!
//! ```text
//! Stage (node arena, document order)
//!   ├── Selector queries resolve to NodeIds
//!   ├── ScrollTrigger observes node rects against a viewport rect
//!   └── node styles are written by the tween engine (glint-motion)
//!
//! ParticleField
//!   └── owns its particle pool, paints through the Painter trait
//! ```

pub mod node;
pub mod painter;
pub mod particles;
pub mod selector;
pub mod stage;
pub mod trigger;

pub use node::{NodeId, NodeStyle, Rect, StageNode};
pub use painter::{DisplayListPainter, PaintCommand, Painter};
pub use particles::{Particle, ParticleField, CONNECT_DISTANCE, PARTICLE_COUNT};
pub use selector::Selector;
pub use stage::Stage;
pub use trigger::{ObserveSpec, ScrollTrigger};
