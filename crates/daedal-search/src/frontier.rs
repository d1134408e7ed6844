//! The frontier: discovered-but-not-yet-expanded nodes.
//!
//! [`Frontier`] is the capability seam between the engine and its search
//! order. Both implementations share add/contains/empty semantics;
//! [`Frontier::remove`] alone decides whether a search is depth-first
//! ([`StackFrontier`]) or breadth-first ([`QueueFrontier`]).

use std::collections::VecDeque;

use daedal_core::Cell;

use crate::error::SearchError;
use crate::tree::NodeId;

/// Queue discipline over discovered-but-not-yet-expanded search nodes.
pub trait Frontier {
    /// Append a node. Unconditional; no deduplication happens here.
    fn add(&mut self, id: NodeId, state: Cell);

    /// Whether any queued node carries this state.
    ///
    /// A linear scan; the contract is semantic, not a performance promise.
    fn contains_state(&self, state: Cell) -> bool;

    /// Whether the frontier holds no nodes.
    fn is_empty(&self) -> bool;

    /// Remove and return one node per policy.
    ///
    /// Errors with [`SearchError::EmptyFrontier`] if nothing is queued.
    fn remove(&mut self) -> Result<NodeId, SearchError>;
}

// ---------------------------------------------------------------------------
// StackFrontier
// ---------------------------------------------------------------------------

/// LIFO frontier: removes the most recently added node (depth-first).
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<(NodeId, Cell)>,
}

impl StackFrontier {
    /// Create an empty stack frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, id: NodeId, state: Cell) {
        self.nodes.push((id, state));
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|&(_, s)| s == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn remove(&mut self) -> Result<NodeId, SearchError> {
        match self.nodes.pop() {
            Some((id, _)) => Ok(id),
            None => Err(SearchError::EmptyFrontier),
        }
    }
}

// ---------------------------------------------------------------------------
// QueueFrontier
// ---------------------------------------------------------------------------

/// FIFO frontier: removes the least recently added node (breadth-first).
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<(NodeId, Cell)>,
}

impl QueueFrontier {
    /// Create an empty queue frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, id: NodeId, state: Cell) {
        self.nodes.push_back((id, state));
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|&(_, s)| s == state)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn remove(&mut self) -> Result<NodeId, SearchError> {
        match self.nodes.pop_front() {
            Some((id, _)) => Ok(id),
            None => Err(SearchError::EmptyFrontier),
        }
    }
}
