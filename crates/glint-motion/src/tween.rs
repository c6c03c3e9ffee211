//! Tween descriptors and per-element runtime state.
//!
//! A [`TweenSpec`] is the property-change descriptor a caller hands to
//! `animate`: which properties move, how long, after what delay, with what
//! easing. One [`ActiveTween`] is created per resolved element, carrying
//! that element's captured start values and its own staggered delay.
//!
//! Start-value capture is deliberately shallow: opacity is read from the
//! element's current style, but translate/scale/rotate always start from
//! identity, ignoring any transform already on the node. An element that
//! already carries a non-identity transform will visibly jump at tween
//! start. That is a scope limitation of the original effect layer and is
//! preserved as documented behavior.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use glint_stage::{NodeId, Stage};

use crate::easing::EasingFunction;
use crate::interpolate::Interpolate;
use crate::transform::TransformParts;

/// Unique identifier for an active tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TweenId(pub u64);

impl TweenId {
    /// Generate a new unique tween id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TweenId {
    fn default() -> Self {
        Self::new()
    }
}

/// Current state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Waiting out its delay; no style has been written yet.
    Pending,
    /// Actively interpolating.
    Running,
    /// Reached full progress; final values written, callback fired.
    Finished,
}

/// What a tween call applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// A single node.
    Node(NodeId),
    /// An explicit collection, animated in the given order.
    Nodes(Vec<NodeId>),
    /// A selector resolved against the stage at call time, in document
    /// order.
    Selector(String),
}

impl Target {
    /// Resolve to existing node ids. Empty resolution is a valid no-op.
    pub fn resolve(&self, stage: &Stage) -> Vec<NodeId> {
        match self {
            Self::Node(id) => stage.get(*id).map(|n| n.id).into_iter().collect(),
            Self::Nodes(ids) => ids
                .iter()
                .copied()
                .filter(|id| stage.get(*id).is_some())
                .collect(),
            Self::Selector(s) => stage.query(s),
        }
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

/// Shared completion callback, invoked once per animated element.
pub type CompletionCallback = Rc<dyn Fn(NodeId)>;

const DEFAULT_DURATION_S: f64 = 1.0;

/// Property-change descriptor for one `animate` call.
///
/// Omitted properties do not animate. Durations are in seconds, matching
/// the page-facing API; the engine works in milliseconds internally.
#[derive(Clone, Default)]
pub struct TweenSpec {
    /// Horizontal translate offset target, px.
    pub x: Option<f64>,
    /// Vertical translate offset target, px.
    pub y: Option<f64>,
    /// Opacity target.
    pub opacity: Option<f64>,
    /// Uniform scale target.
    pub scale: Option<f64>,
    /// Rotation target, degrees.
    pub rotate: Option<f64>,
    /// Duration in seconds; `None` or non-positive values use the default
    /// of 1 second.
    pub duration_s: Option<f64>,
    /// Delay before the tween starts, seconds.
    pub delay_s: f64,
    /// Extra delay per element index across a batch, seconds.
    pub stagger_s: Option<f64>,
    /// Easing curve; defaults to EaseOutQuad.
    pub easing: EasingFunction,
    /// Invoked exactly once per element when its tween completes.
    pub on_complete: Option<CompletionCallback>,
}

impl TweenSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn duration_s(mut self, seconds: f64) -> Self {
        self.duration_s = Some(seconds);
        self
    }

    pub fn delay_s(mut self, seconds: f64) -> Self {
        self.delay_s = seconds;
        self
    }

    pub fn stagger_s(mut self, seconds: f64) -> Self {
        self.stagger_s = Some(seconds);
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set the easing by its web-style name; unknown names silently use the
    /// default curve.
    pub fn ease_name(mut self, name: &str) -> Self {
        self.easing = EasingFunction::from_name(name);
        self
    }

    pub fn on_complete(mut self, f: impl Fn(NodeId) + 'static) -> Self {
        self.on_complete = Some(Rc::new(f));
        self
    }

    /// Effective duration in milliseconds after coercing bad values.
    pub(crate) fn duration_ms(&self) -> f32 {
        let seconds = match self.duration_s {
            Some(s) if s > 0.0 => s,
            _ => DEFAULT_DURATION_S,
        };
        (seconds * 1000.0) as f32
    }

    /// Effective delay in milliseconds for element `index` in the batch.
    pub(crate) fn delay_ms_for(&self, index: usize) -> f32 {
        let stagger = self.stagger_s.unwrap_or(0.0) * index as f64;
        ((self.delay_s + stagger) * 1000.0) as f32
    }
}

/// A start/end pair for one animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    from: f64,
    to: f64,
}

impl Span {
    fn at(&self, eased: f32) -> f64 {
        self.from.interpolate(&self.to, eased)
    }
}

/// Style values produced by sampling a tween at its current progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSample {
    pub opacity: Option<f64>,
    pub transform: Option<String>,
}

/// Runtime state for one element's tween.
pub struct ActiveTween {
    pub id: TweenId,
    pub node: NodeId,
    opacity: Option<Span>,
    translate: Option<(Span, Span)>,
    scale: Option<Span>,
    rotate: Option<Span>,
    duration_ms: f32,
    delay_ms: f32,
    elapsed_ms: f32,
    easing: EasingFunction,
    state: TweenState,
    on_complete: Option<CompletionCallback>,
}

impl ActiveTween {
    /// Build the runtime state for element `index` of a batch.
    ///
    /// `start_opacity` is the element's current style opacity; transform
    /// components always start from identity (see module docs).
    pub fn new(node: NodeId, spec: &TweenSpec, index: usize, start_opacity: f64) -> Self {
        let translate = if spec.x.is_some() || spec.y.is_some() {
            Some((
                Span {
                    from: 0.0,
                    to: spec.x.unwrap_or(0.0),
                },
                Span {
                    from: 0.0,
                    to: spec.y.unwrap_or(0.0),
                },
            ))
        } else {
            None
        };
        let delay_ms = spec.delay_ms_for(index);

        Self {
            id: TweenId::new(),
            node,
            opacity: spec.opacity.map(|to| Span {
                from: start_opacity,
                to,
            }),
            translate,
            scale: spec.scale.map(|to| Span { from: 1.0, to }),
            rotate: spec.rotate.map(|to| Span { from: 0.0, to }),
            duration_ms: spec.duration_ms(),
            delay_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: if delay_ms > 0.0 {
                TweenState::Pending
            } else {
                TweenState::Running
            },
            on_complete: spec.on_complete.clone(),
        }
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    pub fn is_active(&self) -> bool {
        self.state != TweenState::Finished
    }

    /// Linear progress through the active phase, in [0, 1].
    pub fn progress(&self) -> f32 {
        let active_elapsed = (self.elapsed_ms - self.delay_ms).max(0.0);
        if self.duration_ms > 0.0 {
            (active_elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Advance by `delta_ms`. Returns `true` while the tween still needs
    /// future frames.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        match self.state {
            TweenState::Finished => false,
            TweenState::Pending => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms >= self.delay_ms {
                    self.state = TweenState::Running;
                }
                true
            }
            TweenState::Running => {
                self.elapsed_ms += delta_ms;
                if self.elapsed_ms - self.delay_ms >= self.duration_ms {
                    self.state = TweenState::Finished;
                    false
                } else {
                    true
                }
            }
        }
    }

    /// Style values at the current eased progress.
    ///
    /// Pending tweens sample to an empty write set: nothing is mutated
    /// during the delay phase.
    pub fn sample(&self) -> StyleSample {
        if self.state == TweenState::Pending {
            return StyleSample::default();
        }
        let eased = self.easing.evaluate(self.progress());

        let transform = TransformParts {
            translate: self.translate.map(|(x, y)| (x.at(eased), y.at(eased))),
            scale: self.scale.map(|s| s.at(eased)),
            rotate: self.rotate.map(|r| r.at(eased)),
        }
        .compose();

        StyleSample {
            opacity: self.opacity.map(|o| o.at(eased)),
            transform,
        }
    }

    /// Take the completion callback, leaving the tween without one.
    pub(crate) fn take_callback(&mut self) -> Option<CompletionCallback> {
        self.on_complete.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_stage::StageNode;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_target_resolution() {
        let mut stage = Stage::new();
        let a = stage.insert(StageNode::new("div").with_class("card"));
        let b = stage.insert(StageNode::new("div").with_class("card"));

        assert_eq!(Target::Node(a).resolve(&stage), vec![a]);
        assert_eq!(Target::from(".card").resolve(&stage), vec![a, b]);
        assert_eq!(Target::Nodes(vec![b, a]).resolve(&stage), vec![b, a]);
        assert!(Target::from(".missing").resolve(&stage).is_empty());
        assert!(Target::Node(NodeId(999)).resolve(&stage).is_empty());
    }

    #[test]
    fn test_linear_midpoint_interpolation() {
        // start 0, end 100, duration 1s, linear: at 0.5s the value is 50.
        let spec = TweenSpec::new()
            .x(100.0)
            .duration_s(1.0)
            .easing(EasingFunction::Linear);
        let mut tween = ActiveTween::new(NodeId(1), &spec, 0, 1.0);

        tween.update(500.0);
        let sample = tween.sample();
        assert_eq!(sample.transform.as_deref(), Some("translate(50px, 0px)"));
    }

    #[test]
    fn test_delay_phase_writes_nothing() {
        let spec = TweenSpec::new()
            .opacity(0.0)
            .delay_s(0.5)
            .duration_s(0.5)
            .easing(EasingFunction::Linear);
        let mut tween = ActiveTween::new(NodeId(1), &spec, 0, 1.0);
        assert_eq!(tween.state(), TweenState::Pending);

        // 480ms in: still pending, no mutation.
        for _ in 0..30 {
            tween.update(16.0);
        }
        assert_eq!(tween.sample(), StyleSample::default());

        // Past the delay: running and writing.
        tween.update(32.0);
        assert_eq!(tween.state(), TweenState::Running);
        assert!(tween.sample().opacity.is_some());

        // Complete within duration plus a frame.
        for _ in 0..32 {
            tween.update(16.0);
        }
        assert_eq!(tween.state(), TweenState::Finished);
        assert!(approx_eq(tween.sample().opacity.unwrap(), 0.0));
    }

    #[test]
    fn test_stagger_offsets_delay_by_index() {
        let spec = TweenSpec::new().opacity(1.0).stagger_s(0.1);
        let t0 = ActiveTween::new(NodeId(1), &spec, 0, 0.0);
        let t1 = ActiveTween::new(NodeId(2), &spec, 1, 0.0);
        let t2 = ActiveTween::new(NodeId(3), &spec, 2, 0.0);
        assert_eq!(t0.delay_ms(), 0.0);
        assert_eq!(t1.delay_ms(), 100.0);
        assert_eq!(t2.delay_ms(), 200.0);
    }

    #[test]
    fn test_omitted_properties_do_not_animate() {
        let spec = TweenSpec::new().opacity(0.0).easing(EasingFunction::Linear);
        let mut tween = ActiveTween::new(NodeId(1), &spec, 0, 1.0);
        tween.update(500.0);
        let sample = tween.sample();
        assert!(sample.opacity.is_some());
        assert_eq!(sample.transform, None);
    }

    #[test]
    fn test_opacity_starts_from_current_style() {
        let spec = TweenSpec::new().opacity(1.0).easing(EasingFunction::Linear);
        let mut tween = ActiveTween::new(NodeId(1), &spec, 0, 0.5);
        tween.update(500.0);
        assert!(approx_eq(tween.sample().opacity.unwrap(), 0.75));
    }

    #[test]
    fn test_bad_duration_coerced_to_default() {
        let spec = TweenSpec::new().opacity(0.0).duration_s(0.0);
        let tween = ActiveTween::new(NodeId(1), &spec, 0, 1.0);
        // Default duration is 1s.
        let mut tween = tween;
        tween.update(500.0);
        assert!(approx_eq(tween.progress() as f64, 0.5));
    }

    #[test]
    fn test_overshoot_pushes_past_target() {
        let spec = TweenSpec::new()
            .y(100.0)
            .duration_s(1.0)
            .easing(EasingFunction::EaseOutBack);
        let mut tween = ActiveTween::new(NodeId(1), &spec, 0, 1.0);
        // Near the overshoot peak the y offset exceeds the target.
        tween.update(700.0);
        let sample = tween.sample();
        let transform = sample.transform.unwrap();
        let y: f64 = transform
            .trim_start_matches("translate(0px, ")
            .trim_end_matches("px)")
            .parse()
            .unwrap();
        assert!(y > 100.0, "expected overshoot past 100, got {y}");
    }
}
