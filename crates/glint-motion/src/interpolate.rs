//! Interpolation between tweened values.
//!
//! Interpolation is a plain lerp that deliberately does not clamp the
//! factor: overshooting easings (EaseOutBack) hand in eased progress above
//! 1.0 and expect the value to extrapolate past the target before settling.

/// Trait for values that can be linearly interpolated.
pub trait Interpolate: Sized {
    /// Interpolate from self towards `to`.
    ///
    /// `t = 0.0` returns self, `t = 1.0` returns `to`; values outside
    /// [0, 1] extrapolate.
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * f64::from(t)
    }
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(0.0_f64.interpolate(&100.0, 0.0), 0.0);
        assert_eq!(0.0_f64.interpolate(&100.0, 1.0), 100.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(0.0_f64.interpolate(&100.0, 0.5), 50.0);
        assert_eq!(10.0_f32.interpolate(&20.0, 0.25), 12.5);
    }

    #[test]
    fn test_extrapolates_past_target() {
        // Overshooting eased progress must push past the end value.
        let v = 0.0_f64.interpolate(&100.0, 1.1);
        assert!((v - 110.0).abs() < 1e-4, "got {v}");
    }
}
