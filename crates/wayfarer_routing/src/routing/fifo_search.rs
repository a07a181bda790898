use std::collections::VecDeque;

use tracing::debug;

use crate::{
    error::RoutingError,
    search_space::{NodeStates, SearchSpace},
    stopwatch::Stopwatch,
};

use super::{
    node_state::NodeState,
    shortest_path_algorithm::{
        CalcPathOptions, CalcPathResult, SearchStatistics, ShortestPathDebugInfo, build_path,
        check_endpoints,
    },
};

/// Frontier expansion over a plain FIFO queue.
///
/// `admit` receives the current state of a neighbor and the distance it
/// would have through the node being expanded, and decides whether the
/// neighbor is (re-)enqueued. Duplicate entries of a node are expanded with
/// whatever distance the node holds when they come out of the queue.
pub(super) fn fifo_search<S, F>(
    name: &str,
    space: &S,
    start: S::NodeId,
    end: S::NodeId,
    options: Option<CalcPathOptions>,
    admit: F,
) -> Result<CalcPathResult<S::NodeId>, RoutingError>
where
    S: SearchSpace,
    F: Fn(NodeState<S::NodeId>, f64) -> bool,
{
    let stopwatch = Stopwatch::new(name);
    check_endpoints(space, start, end)?;

    let include_debug_info = CalcPathOptions::include_debug_info(options);
    let mut visited_nodes = Vec::new();

    let mut states = space.node_states();
    states.set_state(start, NodeState::Start);

    let mut queue = VecDeque::with_capacity(64);
    queue.push_back(start);

    let mut queue_insertions = 1;
    let mut iterations = 0;
    let mut neighbors = Vec::with_capacity(8);

    while let Some(current) = queue.pop_front() {
        iterations += 1;
        if include_debug_info {
            visited_nodes.push(current);
        }

        if current == end {
            break;
        }

        let Some(current_distance) = states.state(current).distance() else {
            continue;
        };

        neighbors.clear();
        space.neighbors(current, &mut neighbors);

        for &adj_node in neighbors.iter() {
            let next_distance = current_distance + space.distance(current, adj_node);

            if !admit(states.state(adj_node), next_distance) {
                continue;
            }

            states.set_state(
                adj_node,
                NodeState::ReachedFrom {
                    previous: current,
                    distance: next_distance,
                },
            );
            queue.push_back(adj_node);
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
        "{} finished",
        name
    );

    Ok(CalcPathResult {
        path,
        statistics,
        debug: include_debug_info.then_some(ShortestPathDebugInfo { visited_nodes }),
    })
}
