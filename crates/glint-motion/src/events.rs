//! Tween lifecycle events.
//!
//! The engine queues an event when a tween starts and when it finishes.
//! Callers drain the queue after each update to chain sequences (the page
//! load orchestration starts entrance tweens off the loader's `Finished`
//! event) without re-entering the engine from inside a callback.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use glint_stage::NodeId;

use crate::tween::TweenId;

/// Event emitted when a tween changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TweenEvent {
    /// Tween registered and scheduled (its delay may still be pending).
    Started { id: TweenId, node: NodeId },
    /// Tween reached full progress; final values are written.
    Finished { id: TweenId, node: NodeId },
}

impl TweenEvent {
    pub fn node(&self) -> NodeId {
        match self {
            Self::Started { node, .. } | Self::Finished { node, .. } => *node,
        }
    }

    pub fn id(&self) -> TweenId {
        match self {
            Self::Started { id, .. } | Self::Finished { id, .. } => *id,
        }
    }
}

/// FIFO queue of tween events.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TweenEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TweenEvent) {
        self.events.push_back(event);
    }

    /// Drain all queued events in emission order.
    pub fn drain(&mut self) -> impl Iterator<Item = TweenEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
