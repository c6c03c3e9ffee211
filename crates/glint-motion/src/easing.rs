//! Easing functions for tween timing.
//!
//! The set matches what the page actually uses: linear, the quadratic and
//! exponential ease-outs, and the overshooting back curve. Names follow the
//! web convention (`"easeOutQuad"` etc.) and unknown names silently fall
//! back to the default rather than erroring; a bad easing name must never
//! stop the page from animating.

use serde::{Deserialize, Serialize};

/// Constant controlling the EaseOutBack overshoot amplitude.
const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;

/// Easing function for tween timing.
///
/// Maps linear progress in [0, 1] to eased progress. Output may transiently
/// exceed 1.0 (`EaseOutBack`); callers must tolerate out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingFunction {
    /// Identity: progress passes through unchanged.
    Linear,
    /// Quadratic ease-out: `t * (2 - t)`. The default.
    EaseOutQuad,
    /// Overshoot-then-settle cubic: rises above 1.0 before settling.
    EaseOutBack,
    /// Exponential ease-out: very fast start, long tail; exactly 1.0 at
    /// `t == 1`.
    EaseOutExpo,
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::EaseOutQuad
    }
}

impl EasingFunction {
    /// Evaluate the easing function at the given progress.
    ///
    /// Input is clamped to [0, 1]; output may exceed 1.0 for the back
    /// curve.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseOutBack => {
                let shifted = t - 1.0;
                1.0 + BACK_C3 * shifted.powi(3) + BACK_C1 * shifted.powi(2)
            }
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }

    /// Look up an easing by its web-style name.
    ///
    /// Unknown names fall back to [`EasingFunction::EaseOutQuad`] without
    /// error, by design.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Self::Linear,
            "easeOutQuad" => Self::EaseOutQuad,
            "easeOutBack" => Self::EaseOutBack,
            "easeOutExpo" => Self::EaseOutExpo,
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_linear_is_identity() {
        let ease = EasingFunction::Linear;
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(approx_eq(ease.evaluate(t), t));
        }
    }

    #[test]
    fn test_ease_out_quad_curve() {
        let ease = EasingFunction::EaseOutQuad;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(0.5), 0.75));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));
        // Decelerating: ahead of linear in the middle.
        assert!(ease.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let ease = EasingFunction::EaseOutBack;
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        assert!(approx_eq(ease.evaluate(1.0), 1.0));

        // Somewhere in (0, 1) the curve rises above 1.0.
        let overshoot = (1..100)
            .map(|i| ease.evaluate(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 1.0, "expected overshoot, max was {overshoot}");
    }

    #[test]
    fn test_ease_out_expo_endpoint_exact() {
        let ease = EasingFunction::EaseOutExpo;
        assert_eq!(ease.evaluate(1.0), 1.0);
        assert!(approx_eq(ease.evaluate(0.0), 0.0));
        // Fast start: well past halfway at t = 0.2.
        assert!(ease.evaluate(0.2) > 0.7);
    }

    #[test]
    fn test_from_name_known() {
        assert_eq!(EasingFunction::from_name("linear"), EasingFunction::Linear);
        assert_eq!(
            EasingFunction::from_name("easeOutBack"),
            EasingFunction::EaseOutBack
        );
        assert_eq!(
            EasingFunction::from_name("easeOutExpo"),
            EasingFunction::EaseOutExpo
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_quad() {
        let bogus = EasingFunction::from_name("bogus");
        assert_eq!(bogus, EasingFunction::EaseOutQuad);
        // Fallback tracks the quad curve, not linear.
        for t in [0.1, 0.4, 0.8] {
            assert!(approx_eq(
                bogus.evaluate(t),
                EasingFunction::EaseOutQuad.evaluate(t)
            ));
            assert!(!approx_eq(bogus.evaluate(t), t));
        }
    }

    #[test]
    fn test_input_clamped() {
        let ease = EasingFunction::EaseOutQuad;
        assert!(approx_eq(ease.evaluate(-0.5), 0.0));
        assert!(approx_eq(ease.evaluate(1.5), 1.0));
    }
}
