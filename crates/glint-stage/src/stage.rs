//! The stage: an insertion-ordered arena of nodes with selector queries.

use std::collections::HashMap;

use crate::node::{NodeId, StageNode};
use crate::selector::Selector;

/// Owns every node on the page, in document order.
///
/// Node ids are assigned at insert time and stay stable; queries always
/// return nodes in document (insertion) order.
#[derive(Debug, Default)]
pub struct Stage {
    nodes: Vec<StageNode>,
    index: HashMap<NodeId, usize>,
    next_id: u64,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and assign it a fresh id.
    pub fn insert(&mut self, mut node: StageNode) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        node.id = id;
        self.index.insert(id, self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&StageNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut StageNode> {
        self.index.get(&id).map(|&i| &mut self.nodes[i])
    }

    /// Resolve a selector to matching node ids in document order.
    ///
    /// Malformed selectors and selectors with no matches both produce an
    /// empty result; resolution never fails.
    pub fn query(&self, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse(selector);
        self.nodes
            .iter()
            .filter(|n| selector.matches(n))
            .map(|n| n.id)
            .collect()
    }

    /// First match in document order, if any.
    pub fn query_first(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        self.nodes.iter().find(|n| selector.matches(n)).map(|n| n.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
