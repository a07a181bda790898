use super::{astar::AStar, astar_heuristic::ZeroHeuristic};

pub struct UniformCost;

/// Heap-backed Dijkstra is simply A* with a zero heuristic
impl UniformCost {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> AStar<ZeroHeuristic> {
        AStar::with_heuristic(ZeroHeuristic)
    }
}
