use std::cmp::Ordering;

use tracing::debug;

use crate::{
    error::RoutingError,
    priority_queue::HeapPriorityQueue,
    search_space::{NodeStates, SearchSpace},
    stopwatch::Stopwatch,
};

use super::{
    astar_heuristic::{AStarHeuristic, EuclideanHeuristic},
    node_state::NodeState,
    shortest_path_algorithm::{
        CalcPath, CalcPathOptions, CalcPathResult, SearchStatistics, ShortestPathDebugInfo,
        build_path, check_endpoints,
    },
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Copy, Clone, Debug)]
struct HeapItem<Id> {
    node_id: Id,

    /// g_score is the cheapest known distance from the start to "node_id"
    /// at the time the item was pushed
    g_score: f64,

    /// f_score = g_score + h_score, with h_score being the heuristic value from node_id to the end
    f_score: f64,

    /// Insertion order, equal f_scores come out first in first out
    sequence: usize,
}

impl<Id> PartialEq for HeapItem<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<Id> Eq for HeapItem<Id> {}

impl<Id> PartialOrd for HeapItem<Id> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Id> Ord for HeapItem<Id> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

pub struct AStar<H: AStarHeuristic> {
    heuristic: H,
}

impl AStar<EuclideanHeuristic> {
    pub fn new() -> Self {
        AStar::with_heuristic(EuclideanHeuristic)
    }
}

impl Default for AStar<EuclideanHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        AStar { heuristic }
    }
}

impl<H: AStarHeuristic> CalcPath for AStar<H> {
    fn calc_path<S: SearchSpace>(
        &self,
        space: &S,
        start: S::NodeId,
        end: S::NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<S::NodeId>, RoutingError> {
        let stopwatch = Stopwatch::new("astar/calc_path");
        check_endpoints(space, start, end)?;

        let include_debug_info = CalcPathOptions::include_debug_info(options);
        let mut visited_nodes = Vec::new();

        let mut states = space.node_states();
        states.set_state(start, NodeState::Start);

        let mut heap = HeapPriorityQueue::with_capacity(64);
        heap.push(HeapItem {
            node_id: start,
            g_score: 0.0,
            f_score: self.heuristic.estimate(space, start, end),
            sequence: 0,
        });

        let mut queue_insertions = 1;
        let mut iterations = 0;
        let mut neighbors = Vec::with_capacity(8);

        while let Some(HeapItem {
            node_id, g_score, ..
        }) = heap.pop()
        {
            // Stale entry, the node was improved after this item was pushed
            if states
                .state(node_id)
                .distance()
                .is_some_and(|distance| g_score > distance)
            {
                continue;
            }

            iterations += 1;
            if include_debug_info {
                visited_nodes.push(node_id);
            }

            if node_id == end {
                break;
            }

            neighbors.clear();
            space.neighbors(node_id, &mut neighbors);

            for &adj_node in neighbors.iter() {
                let tentative_g_score = g_score + space.distance(node_id, adj_node);

                if states
                    .state(adj_node)
                    .distance()
                    .is_some_and(|distance| tentative_g_score >= distance)
                {
                    continue;
                }

                states.set_state(
                    adj_node,
                    NodeState::ReachedFrom {
                        previous: node_id,
                        distance: tentative_g_score,
                    },
                );
                heap.push(HeapItem {
                    node_id: adj_node,
                    g_score: tentative_g_score,
                    f_score: tentative_g_score + self.heuristic.estimate(space, adj_node, end),
                    sequence: queue_insertions,
                });
                queue_insertions += 1;
            }
        }

        let path = build_path(&states, end);
        let statistics = SearchStatistics {
            queue_insertions,
            iterations,
            nodes_reached: states.reached_count(),
            elapsed: stopwatch.report(),
        };

        debug!(
            iterations,
            queue_insertions,
            found = path.is_some(),
            "astar/calc_path finished"
        );

        Ok(CalcPathResult {
            path,
            statistics,
            debug: include_debug_info.then_some(ShortestPathDebugInfo { visited_nodes }),
        })
    }
}
