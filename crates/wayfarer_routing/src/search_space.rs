use std::{fmt::Debug, hash::Hash};

use fxhash::{FxBuildHasher, FxHashMap};

use crate::routing::node_state::NodeState;

/// Side table holding the search state of every node for a single run.
pub trait NodeStates<Id> {
    fn state(&self, node: Id) -> NodeState<Id>;

    fn set_state(&mut self, node: Id, state: NodeState<Id>);

    /// Number of nodes that left the `Unvisited` state during the run.
    fn reached_count(&self) -> usize;
}

/// Anything the search algorithms can walk: an explicit graph or an
/// implicit grid of cells.
pub trait SearchSpace {
    type NodeId: Copy + Eq + Debug;
    type States: NodeStates<Self::NodeId>;

    fn contains(&self, node: Self::NodeId) -> bool;

    /// Appends the nodes reachable in one step from `node` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::NodeId, buf: &mut Vec<Self::NodeId>);

    /// Straight-line distance, used both as edge length and as heuristic.
    fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> f64;

    /// Fresh state table, every node unvisited.
    fn node_states(&self) -> Self::States;
}

#[derive(Debug, Clone)]
pub struct NodeStateMap<Id> {
    states: FxHashMap<Id, NodeState<Id>>,
}

impl<Id: Copy + Eq + Hash> NodeStateMap<Id> {
    pub fn with_capacity(capacity: usize) -> Self {
        NodeStateMap {
            states: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }
}

impl<Id: Copy + Eq + Hash> NodeStates<Id> for NodeStateMap<Id> {
    #[inline(always)]
    fn state(&self, node: Id) -> NodeState<Id> {
        self.states.get(&node).copied().unwrap_or_default()
    }

    #[inline(always)]
    fn set_state(&mut self, node: Id, state: NodeState<Id>) {
        self.states.insert(node, state);
    }

    fn reached_count(&self) -> usize {
        self.states.values().filter(|state| state.is_visited()).count()
    }
}
