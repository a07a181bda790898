/// Transient per-run state of a node.
///
/// `Unvisited` means the node has never been admitted to the frontier by the
/// running search. Exactly one node, the start, is in the `Start` state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeState<Id> {
    Unvisited,
    Start,
    ReachedFrom { previous: Id, distance: f64 },
}

impl<Id: Copy> NodeState<Id> {
    #[inline(always)]
    pub fn is_visited(&self) -> bool {
        !matches!(self, NodeState::Unvisited)
    }

    /// Accumulated cost from the start, `None` while unvisited.
    #[inline(always)]
    pub fn distance(&self) -> Option<f64> {
        match self {
            NodeState::Unvisited => None,
            NodeState::Start => Some(0.0),
            NodeState::ReachedFrom { distance, .. } => Some(*distance),
        }
    }

    pub fn previous(&self) -> Option<Id> {
        match self {
            NodeState::ReachedFrom { previous, .. } => Some(*previous),
            _ => None,
        }
    }
}

impl<Id> Default for NodeState<Id> {
    fn default() -> Self {
        NodeState::Unvisited
    }
}
