use std::time::Duration;

use serde::Serialize;

use crate::{
    error::RoutingError,
    search_space::{NodeStates, SearchSpace},
};

use super::{node_state::NodeState, routing_path::RoutingPath};

#[derive(Debug, Clone, Copy, Default)]
pub struct CalcPathOptions {
    pub include_debug_info: Option<bool>,
}

impl CalcPathOptions {
    pub(crate) fn include_debug_info(options: Option<CalcPathOptions>) -> bool {
        options
            .and_then(|options| options.include_debug_info)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathDebugInfo<Id> {
    /// Nodes in the order they were taken out of the queue and expanded.
    pub visited_nodes: Vec<Id>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStatistics {
    /// Every push onto the frontier, the start included.
    pub queue_insertions: usize,
    /// Nodes taken out of the frontier and expanded, stale entries excluded.
    pub iterations: usize,
    /// Nodes that received a search state during the run.
    pub nodes_reached: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcPathResult<Id> {
    pub path: Option<RoutingPath<Id>>,
    pub statistics: SearchStatistics,
    pub debug: Option<ShortestPathDebugInfo<Id>>,
}

impl<Id> CalcPathResult<Id> {
    /// Distance of the route found, `0.0` when there is none.
    pub fn traveled_distance(&self) -> f64 {
        self.path.as_ref().map_or(0.0, RoutingPath::distance)
    }

    pub fn map_nodes<T>(self, mut f: impl FnMut(Id) -> T) -> CalcPathResult<T> {
        CalcPathResult {
            path: self.path.map(|path| path.map(&mut f)),
            statistics: self.statistics,
            debug: self.debug.map(|debug| ShortestPathDebugInfo {
                visited_nodes: debug.visited_nodes.into_iter().map(&mut f).collect(),
            }),
        }
    }
}

pub trait CalcPath {
    fn calc_path<S: SearchSpace>(
        &self,
        space: &S,
        start: S::NodeId,
        end: S::NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<S::NodeId>, RoutingError>;
}

pub(crate) fn check_endpoints<S: SearchSpace>(
    space: &S,
    start: S::NodeId,
    end: S::NodeId,
) -> Result<(), RoutingError> {
    if !space.contains(start) {
        return Err(RoutingError::UnresolvedNode(format!("{start:?}")));
    }

    if !space.contains(end) {
        return Err(RoutingError::UnresolvedNode(format!("{end:?}")));
    }

    Ok(())
}

/// Walks the `previous` links back from `end` to the start.
pub(crate) fn build_path<Id: Copy, T: NodeStates<Id>>(
    states: &T,
    end: Id,
) -> Option<RoutingPath<Id>> {
    let distance = states.state(end).distance()?;

    let mut nodes = Vec::with_capacity(32);
    nodes.push(end);

    let mut node = end;
    while let NodeState::ReachedFrom { previous, .. } = states.state(node) {
        nodes.push(previous);
        node = previous;
    }

    nodes.reverse();

    Some(RoutingPath::new(nodes, distance))
}
