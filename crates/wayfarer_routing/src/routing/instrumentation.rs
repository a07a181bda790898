use serde::Serialize;

use super::shortest_path_algorithm::CalcPathResult;

/// Counters of the last route computed on a graph or terrain, exposed
/// through `queue_insertion_count` and `traveled_distance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RouteInstrumentation {
    queue_insertion_count: usize,
    traveled_distance: f64,
}

impl RouteInstrumentation {
    pub fn queue_insertion_count(&self) -> usize {
        self.queue_insertion_count
    }

    /// `0.0` when the last search found no route.
    pub fn traveled_distance(&self) -> f64 {
        self.traveled_distance
    }

    pub fn record<Id>(&mut self, result: &CalcPathResult<Id>) {
        self.queue_insertion_count = result.statistics.queue_insertions;
        self.traveled_distance = result.traveled_distance();
    }

    pub fn reset(&mut self) {
        *self = RouteInstrumentation::default();
    }
}
