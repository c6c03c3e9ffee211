//! Composed transform strings.
//!
//! The tween engine writes a node's transform as one composed string in the
//! fixed order translate → scale → rotate, omitting any component the
//! descriptor did not request. Components are kept as options so "not
//! requested" and "animated to a neutral value" stay distinguishable.

/// The transform components a tween is driving for one node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformParts {
    /// Translation offsets in px.
    pub translate: Option<(f64, f64)>,
    /// Uniform scale factor.
    pub scale: Option<f64>,
    /// Rotation in degrees.
    pub rotate: Option<f64>,
}

impl TransformParts {
    /// True when no component is present at all.
    pub fn is_empty(&self) -> bool {
        self.translate.is_none() && self.scale.is_none() && self.rotate.is_none()
    }

    /// Compose the transform string in translate → scale → rotate order.
    ///
    /// Returns `None` when no component is present, so untouched nodes keep
    /// an unset transform.
    pub fn compose(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut parts = Vec::with_capacity(3);
        if let Some((x, y)) = self.translate {
            parts.push(format!("translate({x}px, {y}px)"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({r}deg)"));
        }
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_composes_to_none() {
        assert_eq!(TransformParts::default().compose(), None);
    }

    #[test]
    fn test_full_composition_order() {
        let parts = TransformParts {
            translate: Some((10.0, -4.5)),
            scale: Some(1.2),
            rotate: Some(45.0),
        };
        assert_eq!(
            parts.compose().unwrap(),
            "translate(10px, -4.5px) scale(1.2) rotate(45deg)"
        );
    }

    #[test]
    fn test_unrequested_components_omitted() {
        let parts = TransformParts {
            translate: Some((12.0, 0.0)),
            scale: None,
            rotate: Some(90.0),
        };
        assert_eq!(
            parts.compose().unwrap(),
            "translate(12px, 0px) rotate(90deg)"
        );

        let scale_only = TransformParts {
            translate: None,
            scale: Some(0.5),
            rotate: None,
        };
        assert_eq!(scale_only.compose().unwrap(), "scale(0.5)");
    }
}
