//! Stage node types: ids, layout rects and inline style.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a node on the stage.
///
/// Ids are assigned by the owning [`Stage`](crate::stage::Stage) at insert
/// time and stay stable for the life of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Axis-aligned layout rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if a point lies inside this rect (edges inclusive).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Compute the overlapping region with another rect, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }
}

/// Inline style carried by a node.
///
/// Only the properties the effects layer actually writes are modeled:
/// opacity as a plain number, and the transform as the composed string the
/// tween engine produces (translate → scale → rotate order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Opacity in [0, 1] (transient overshoot values are tolerated).
    pub opacity: f64,
    /// Composed transform string, `None` when no transform has been set.
    pub transform: Option<String>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: None,
        }
    }
}

/// A single element on the stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageNode {
    /// Stage-assigned id, stable for the stage's lifetime.
    pub id: NodeId,
    /// Tag name (lowercase, e.g. `"div"`).
    pub tag: String,
    /// Element id attribute, if any (matched by `#id` selectors).
    pub element_id: Option<String>,
    /// Class list (matched by `.class` selectors).
    pub classes: Vec<String>,
    /// Attribute map (matched by `[attr]` / `[attr="value"]` selectors).
    pub attributes: HashMap<String, String>,
    /// Layout rectangle in page coordinates.
    pub rect: Rect,
    /// Inline style written by the effect layers.
    pub style: NodeStyle,
}

impl StageNode {
    /// Create a node with the given tag and defaults for everything else.
    ///
    /// The id is a placeholder until the node is inserted into a stage.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: NodeId(0),
            tag: tag.into(),
            element_id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            rect: Rect::default(),
            style: NodeStyle::default(),
        }
    }

    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
