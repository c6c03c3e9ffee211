//! Viewport-visibility trigger for scroll-driven reveals.
//!
//! `ScrollTrigger` is the observation half of the reveal system: callers
//! register a selector with enter/leave callbacks, and each frame (or each
//! scroll step) `check` compares every observed node's rect against the
//! current viewport rect and fires callbacks on visibility edges.
//!
//! Visibility is the intersection ratio: overlap area divided by node area.
//! A node is visible once the ratio reaches the registration's threshold
//! (default 0.2, i.e. 20% of the node inside the viewport). With `once`
//! set, a node is permanently unobserved after its first enter and no
//! further callbacks are delivered for it.

use std::rc::Rc;

use crate::node::{NodeId, Rect};
use crate::stage::Stage;

/// Shared callback invoked with the node that changed visibility.
pub type TriggerCallback = Rc<dyn Fn(NodeId)>;

/// Registration options for [`ScrollTrigger::observe`].
#[derive(Clone, Default)]
pub struct ObserveSpec {
    pub on_enter: Option<TriggerCallback>,
    pub on_leave: Option<TriggerCallback>,
    /// Visible fraction required to count as an enter. `None` uses the
    /// default of 0.2.
    pub threshold: Option<f64>,
    /// Stop observing a node permanently after its first enter.
    pub once: bool,
}

impl ObserveSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(mut self, f: impl Fn(NodeId) + 'static) -> Self {
        self.on_enter = Some(Rc::new(f));
        self
    }

    pub fn on_leave(mut self, f: impl Fn(NodeId) + 'static) -> Self {
        self.on_leave = Some(Rc::new(f));
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

const DEFAULT_THRESHOLD: f64 = 0.2;

/// One observed node and its current visibility state.
struct Watcher {
    node: NodeId,
    on_enter: Option<TriggerCallback>,
    on_leave: Option<TriggerCallback>,
    threshold: f64,
    once: bool,
    visible: bool,
    spent: bool,
}

/// Viewport-intersection observer over stage nodes.
#[derive(Default)]
pub struct ScrollTrigger {
    watchers: Vec<Watcher>,
}

impl ScrollTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register enter/leave observation for every node matching `selector`.
    ///
    /// The selector is resolved once, at call time; nodes inserted later are
    /// not picked up. An empty resolution registers nothing.
    pub fn observe(&mut self, stage: &Stage, selector: &str, spec: ObserveSpec) {
        let nodes = stage.query(selector);
        if nodes.is_empty() {
            log::debug!("observe: selector {selector:?} matched nothing");
            return;
        }
        let threshold = spec.threshold.unwrap_or(DEFAULT_THRESHOLD);
        for node in nodes {
            self.watchers.push(Watcher {
                node,
                on_enter: spec.on_enter.clone(),
                on_leave: spec.on_leave.clone(),
                threshold,
                once: spec.once,
                visible: false,
                spent: false,
            });
        }
    }

    /// Number of active (not yet spent) watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.iter().filter(|w| !w.spent).count()
    }

    /// Re-evaluate visibility for every observed node and fire callbacks on
    /// edges. Callbacks fire in registration order.
    pub fn check(&mut self, stage: &Stage, viewport: Rect) {
        for watcher in &mut self.watchers {
            if watcher.spent {
                continue;
            }
            let Some(node) = stage.get(watcher.node) else {
                continue;
            };
            let now_visible = visible_ratio(&node.rect, &viewport) >= watcher.threshold;
            if now_visible && !watcher.visible {
                watcher.visible = true;
                if let Some(cb) = &watcher.on_enter {
                    cb(watcher.node);
                }
                if watcher.once {
                    watcher.spent = true;
                }
            } else if !now_visible && watcher.visible {
                watcher.visible = false;
                if let Some(cb) = &watcher.on_leave {
                    cb(watcher.node);
                }
            }
        }
        self.watchers.retain(|w| !w.spent);
    }
}

/// Fraction of the node's area inside the viewport.
///
/// Zero-area nodes count as fully visible when their origin lies inside the
/// viewport, so degenerate rects still trigger.
fn visible_ratio(node: &Rect, viewport: &Rect) -> f64 {
    if node.area() <= 0.0 {
        return if viewport.contains(node.x, node.y) {
            1.0
        } else {
            0.0
        };
    }
    match node.intersection(viewport) {
        Some(overlap) => overlap.area() / node.area(),
        None => 0.0,
    }
}
