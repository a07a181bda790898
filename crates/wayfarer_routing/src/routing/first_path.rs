use crate::{error::RoutingError, search_space::SearchSpace};

use super::{
    fifo_search::fifo_search,
    shortest_path_algorithm::{CalcPath, CalcPathOptions, CalcPathResult},
};

/// Breadth-first search: a node is admitted once, the first path reaching
/// it is final. The route found has the fewest edges, not the shortest
/// length.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPath;

impl CalcPath for FirstPath {
    fn calc_path<S: SearchSpace>(
        &self,
        space: &S,
        start: S::NodeId,
        end: S::NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<S::NodeId>, RoutingError> {
        fifo_search("first_path/calc_path", space, start, end, options, |state, _| {
            !state.is_visited()
        })
    }
}
