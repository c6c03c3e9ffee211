//! Small CSS-subset selector engine.
//!
//! Supports the selector forms the effects layer actually uses:
//! - `tag` (e.g. `div`)
//! - `#id`
//! - `.class`
//! - `[attr]` and `[attr="value"]`
//! - compounds of the above without whitespace, e.g.
//!   `div.card[data-anim="fade-up"]`
//!
//! Parsing is lenient: a malformed selector yields a selector that matches
//! nothing, so callers resolving it get an empty set rather than an error.

use crate::node::StageNode;

/// One attribute requirement: presence, or presence with an exact value.
#[derive(Debug, Clone, PartialEq)]
struct AttrFilter {
    name: String,
    value: Option<String>,
}

/// A parsed compound selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrFilter>,
    /// Set when the input could not be parsed; such a selector matches
    /// nothing.
    malformed: bool,
}

impl Selector {
    /// Parse a selector string. Never fails: malformed or empty input
    /// produces a selector that matches no node.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::nothing();
        }

        let mut selector = Selector::default();
        let mut chars = input.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '#' => {
                    chars.next();
                    let name = take_ident(&mut chars);
                    if name.is_empty() {
                        return Self::nothing();
                    }
                    selector.id = Some(name);
                }
                '.' => {
                    chars.next();
                    let name = take_ident(&mut chars);
                    if name.is_empty() {
                        return Self::nothing();
                    }
                    selector.classes.push(name);
                }
                '[' => {
                    chars.next();
                    match parse_attr(&mut chars) {
                        Some(filter) => selector.attrs.push(filter),
                        None => return Self::nothing(),
                    }
                }
                c if c.is_ascii_alphabetic() => {
                    let name = take_ident(&mut chars);
                    if selector.tag.is_some() {
                        return Self::nothing();
                    }
                    selector.tag = Some(name.to_ascii_lowercase());
                }
                _ => return Self::nothing(),
            }
        }

        selector
    }

    fn nothing() -> Self {
        Self {
            malformed: true,
            ..Self::default()
        }
    }

    /// Check whether a node satisfies every part of this selector.
    pub fn matches(&self, node: &StageNode) -> bool {
        if self.malformed {
            return false;
        }
        if let Some(tag) = &self.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.element_id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| node.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|f| match &f.value {
            Some(value) => node.attributes.get(&f.name) == Some(value),
            None => node.attributes.contains_key(&f.name),
        })
    }
}

/// Consume an identifier: letters, digits, `-` and `_`.
fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
            chars.next();
        } else {
            break;
        }
    }
    out
}

/// Parse the body of an attribute filter after the opening `[`.
fn parse_attr(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<AttrFilter> {
    let name = take_ident(chars);
    if name.is_empty() {
        return None;
    }
    match chars.next() {
        Some(']') => Some(AttrFilter { name, value: None }),
        Some('=') => {
            if chars.next() != Some('"') {
                return None;
            }
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(c) => value.push(c),
                    None => return None,
                }
            }
            if chars.next() != Some(']') {
                return None;
            }
            Some(AttrFilter {
                name,
                value: Some(value),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::StageNode;

    fn sample_node() -> StageNode {
        StageNode::new("div")
            .with_element_id("hero")
            .with_class("card")
            .with_class("visible")
            .with_attr("data-anim", "fade-up")
            .with_attr("data-speed", "2")
    }

    #[test]
    fn test_tag_selector() {
        let node = sample_node();
        assert!(Selector::parse("div").matches(&node));
        assert!(!Selector::parse("span").matches(&node));
    }

    #[test]
    fn test_id_selector() {
        let node = sample_node();
        assert!(Selector::parse("#hero").matches(&node));
        assert!(!Selector::parse("#other").matches(&node));
    }

    #[test]
    fn test_class_selector() {
        let node = sample_node();
        assert!(Selector::parse(".card").matches(&node));
        assert!(Selector::parse(".card.visible").matches(&node));
        assert!(!Selector::parse(".missing").matches(&node));
    }

    #[test]
    fn test_attribute_selectors() {
        let node = sample_node();
        assert!(Selector::parse("[data-anim]").matches(&node));
        assert!(Selector::parse("[data-anim=\"fade-up\"]").matches(&node));
        assert!(!Selector::parse("[data-anim=\"slide-right\"]").matches(&node));
        assert!(!Selector::parse("[data-missing]").matches(&node));
    }

    #[test]
    fn test_compound_selector() {
        let node = sample_node();
        assert!(Selector::parse("div.card[data-anim=\"fade-up\"]").matches(&node));
        assert!(Selector::parse("div#hero.visible").matches(&node));
        assert!(!Selector::parse("span.card").matches(&node));
    }

    #[test]
    fn test_malformed_matches_nothing() {
        let node = sample_node();
        assert!(!Selector::parse("").matches(&node));
        assert!(!Selector::parse("#").matches(&node));
        assert!(!Selector::parse("[data-anim").matches(&node));
        assert!(!Selector::parse("div div").matches(&node));
        assert!(!Selector::parse("[=\"x\"]").matches(&node));
    }
}
