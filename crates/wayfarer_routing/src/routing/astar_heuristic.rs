use crate::search_space::SearchSpace;

pub trait AStarHeuristic {
    fn estimate<S: SearchSpace>(&self, space: &S, from: S::NodeId, to: S::NodeId) -> f64;
}

/// Straight-line distance to the target. Never overestimates when edge
/// lengths are euclidean.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl AStarHeuristic for EuclideanHeuristic {
    #[inline(always)]
    fn estimate<S: SearchSpace>(&self, space: &S, from: S::NodeId, to: S::NodeId) -> f64 {
        space.distance(from, to)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate<S: SearchSpace>(&self, _space: &S, _from: S::NodeId, _to: S::NodeId) -> f64 {
        0.0
    }
}
