use crate::{error::RoutingError, search_space::SearchSpace};

use super::{
    fifo_search::fifo_search,
    shortest_path_algorithm::{CalcPath, CalcPathOptions, CalcPathResult},
};

/// Label-correcting search over a FIFO queue.
///
/// A neighbor is re-admitted whenever the distance through the current node
/// is strictly better than the one it holds, leaving duplicate entries in
/// the queue. The search stops the first time the target is dequeued, so
/// with some graphs the route is not the shortest one. Use
/// [`UniformCost`](super::uniform_cost::UniformCost) when it has to be.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl CalcPath for Dijkstra {
    fn calc_path<S: SearchSpace>(
        &self,
        space: &S,
        start: S::NodeId,
        end: S::NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<S::NodeId>, RoutingError> {
        fifo_search(
            "dijkstra/calc_path",
            space,
            start,
            end,
            options,
            |state, next_distance| state.distance().is_none_or(|distance| next_distance < distance),
        )
    }
}
