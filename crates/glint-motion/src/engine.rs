//! The tween engine: owns active tweens, advances them per frame.
//!
//! The engine is an explicit instance, not a global. `animate` only
//! registers work and returns immediately; all interpolation and style
//! writing happens inside `update`, which callers invoke once per frame
//! with the elapsed milliseconds. Nothing here reads a real clock, so tests
//! and headless runs drive animation deterministically.
//!
//! Tweens on the same node are intentionally uncoordinated: the engine
//! iterates in registration order, so when two tweens drive the same
//! property the later registration's write lands last each frame.
//! Last-write-wins is the documented interaction, not a bug.

use std::collections::HashMap;

use glint_stage::Stage;

use crate::events::{EventQueue, TweenEvent};
use crate::tween::{ActiveTween, Target, TweenId, TweenSpec, TweenState};

/// Owns and advances every active tween.
#[derive(Default)]
pub struct TweenEngine {
    tweens: HashMap<TweenId, ActiveTween>,
    /// Registration order; drives the per-frame write order.
    order: Vec<TweenId>,
    events: EventQueue,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one tween per element the target resolves to.
    ///
    /// Element `i` of the resolution gets an effective delay of
    /// `delay + i * stagger`, producing the cascade across a batch. An
    /// empty resolution registers nothing and returns an empty handle list;
    /// it is not an error.
    ///
    /// Returns immediately; no styles change until [`update`](Self::update).
    pub fn animate(
        &mut self,
        stage: &Stage,
        target: impl Into<Target>,
        spec: TweenSpec,
    ) -> Vec<TweenId> {
        let target = target.into();
        let nodes = target.resolve(stage);
        if nodes.is_empty() {
            log::debug!("animate: target {target:?} resolved to nothing");
            return Vec::new();
        }

        let mut ids = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.into_iter().enumerate() {
            // Resolution guarantees the node exists.
            let start_opacity = stage.get(node).map(|n| n.style.opacity).unwrap_or(1.0);
            let tween = ActiveTween::new(node, &spec, index, start_opacity);
            let id = tween.id;
            self.events.push(TweenEvent::Started { id, node });
            self.order.push(id);
            self.tweens.insert(id, tween);
            ids.push(id);
        }
        ids
    }

    /// Advance every tween by `delta_ms` and write the sampled styles back
    /// to the stage.
    ///
    /// Tweens still in their delay phase write nothing. A tween reaching
    /// full progress this frame writes its final values, queues
    /// [`TweenEvent::Finished`], runs its completion callback exactly once
    /// with the animated node, and is dropped from the arena.
    pub fn update(&mut self, stage: &mut Stage, delta_ms: f32) {
        if self.order.is_empty() {
            return;
        }

        let mut finished = Vec::new();
        // Removal only happens after the sweep, so indexing stays stable
        // and no per-frame copy of the order list is needed.
        for i in 0..self.order.len() {
            let id = self.order[i];
            let Some(tween) = self.tweens.get_mut(&id) else {
                continue;
            };
            let still_active = tween.update(delta_ms);

            if tween.state() != TweenState::Pending {
                let sample = tween.sample();
                if let Some(node) = stage.get_mut(tween.node) {
                    if let Some(opacity) = sample.opacity {
                        node.style.opacity = opacity;
                    }
                    if let Some(transform) = sample.transform {
                        node.style.transform = Some(transform);
                    }
                }
            }

            if !still_active {
                finished.push(id);
            }
        }

        for id in finished {
            if let Some(mut tween) = self.tweens.remove(&id) {
                self.order.retain(|i| *i != id);
                log::trace!("tween {id:?} finished on node {:?}", tween.node);
                self.events.push(TweenEvent::Finished {
                    id,
                    node: tween.node,
                });
                if let Some(callback) = tween.take_callback() {
                    callback(tween.node);
                }
            }
        }
    }

    /// Whether the given handle refers to a tween that still needs frames.
    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(&id)
    }

    /// Number of tweens still running or pending.
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    /// Drain queued lifecycle events in emission order.
    pub fn drain_events(&mut self) -> Vec<TweenEvent> {
        self.events.drain().collect()
    }
}
