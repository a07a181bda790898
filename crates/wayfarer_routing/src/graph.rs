use std::{collections::BTreeMap, fmt};

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, RoutingError},
    node::{Node, NodeId},
    point::Point,
    routing::{
        instrumentation::RouteInstrumentation,
        routing_algorithm::RoutingAlgorithm,
        shortest_path_algorithm::{CalcPathOptions, CalcPathResult},
    },
    search_space::{NodeStateMap, SearchSpace},
};

/// Directed graph of labelled points.
///
/// Nodes live in an arena indexed by [`NodeId`], a removed node leaves an
/// empty slot behind. Edges are stored on their source node only, so an
/// edge A -> B says nothing about B -> A. Edge lengths are the euclidean
/// distance between the two points.
///
/// Searches do not mutate the topology, their per-node state is kept in a
/// side table for the duration of one run. The graph only remembers the
/// instrumentation of the last route.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    labels: BTreeMap<String, NodeId>,
    instrumentation: RouteInstrumentation,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.node_id(label).and_then(|node_id| self.node_at(node_id))
    }

    pub fn node_at(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id.0).and_then(Option::as_ref)
    }

    /// Nodes in label order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.labels
            .values()
            .filter_map(|node_id| self.node_at(*node_id))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes().map(Node::degree).sum()
    }

    pub fn add_node(&mut self, point: Point) -> Result<NodeId, GraphError> {
        if self.labels.contains_key(point.label()) {
            return Err(GraphError::AmbiguousNode(point.label().to_string()));
        }

        let node_id = NodeId(self.nodes.len());
        self.labels.insert(point.label().to_string(), node_id);
        self.nodes.push(Some(Node::new(point)));

        Ok(node_id)
    }

    /// Removes the node and every edge pointing to it.
    pub fn remove_node(&mut self, label: &str) -> Result<Point, GraphError> {
        let node_id = self
            .labels
            .remove(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))?;

        let mut pruned = 0;
        for node in self.nodes.iter_mut().flatten() {
            if node.remove_neighbor(label) {
                pruned += 1;
            }
        }

        let node = self.nodes[node_id.0]
            .take()
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))?;

        debug!(label, pruned, "removed node");

        Ok(node.point().clone())
    }

    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), GraphError> {
        let to_id = self.node_id(to);
        match (self.node_mut(from), to_id) {
            (Some(node), Some(to_id)) => {
                node.add_neighbor(to, to_id);
                Ok(())
            }
            _ => Err(GraphError::MissingEndpoint {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Returns whether the edge existed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<bool, GraphError> {
        if !self.contains(to) {
            return Err(GraphError::MissingEndpoint {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.node_mut(from)
            .map(|node| node.remove_neighbor(to))
            .ok_or_else(|| GraphError::MissingEndpoint {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Forgets the instrumentation of the last route. The topology is left
    /// untouched.
    pub fn reset(&mut self) {
        self.instrumentation.reset();
    }

    pub fn queue_insertion_count(&self) -> usize {
        self.instrumentation.queue_insertion_count()
    }

    pub fn traveled_distance(&self) -> f64 {
        self.instrumentation.traveled_distance()
    }

    #[instrument(skip(self, options), level = "debug")]
    pub fn route(
        &mut self,
        algorithm: RoutingAlgorithm,
        from: &str,
        to: &str,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<String>, RoutingError> {
        let start = self
            .node_id(from)
            .ok_or_else(|| RoutingError::UnresolvedNode(from.to_string()))?;
        let end = self
            .node_id(to)
            .ok_or_else(|| RoutingError::UnresolvedNode(to.to_string()))?;

        self.reset();
        let result = algorithm.calc_path(&*self, start, end, options)?;
        self.instrumentation.record(&result);

        Ok(result.map_nodes(|node_id| self.label_of(node_id)))
    }

    pub fn route_first_path(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Option<Vec<String>>, RoutingError> {
        self.route_labels(RoutingAlgorithm::FirstPath, from, to)
    }

    pub fn route_dijkstra(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Option<Vec<String>>, RoutingError> {
        self.route_labels(RoutingAlgorithm::Dijkstra, from, to)
    }

    pub fn route_astar(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<Option<Vec<String>>, RoutingError> {
        self.route_labels(RoutingAlgorithm::AStar, from, to)
    }

    fn route_labels(
        &mut self,
        algorithm: RoutingAlgorithm,
        from: &str,
        to: &str,
    ) -> Result<Option<Vec<String>>, RoutingError> {
        let result = self.route(algorithm, from, to, None)?;
        Ok(result.path.map(|path| path.into_nodes()))
    }

    fn node_mut(&mut self, label: &str) -> Option<&mut Node> {
        let node_id = self.node_id(label)?;
        self.nodes.get_mut(node_id.0).and_then(Option::as_mut)
    }

    fn label_of(&self, node_id: NodeId) -> String {
        self.node_at(node_id)
            .map(|node| node.label().to_string())
            .unwrap_or_default()
    }
}

impl SearchSpace for Graph {
    type NodeId = NodeId;
    type States = NodeStateMap<NodeId>;

    fn contains(&self, node: NodeId) -> bool {
        self.node_at(node).is_some()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        if let Some(node) = self.node_at(node) {
            buf.extend(node.neighbor_ids());
        }
    }

    fn distance(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.node_at(from), self.node_at(to)) {
            (Some(from), Some(to)) => from.point().distance(to.point()),
            _ => f64::INFINITY,
        }
    }

    fn node_states(&self) -> NodeStateMap<NodeId> {
        NodeStateMap::with_capacity(self.len())
    }
}

/// One line per node in label order, see [`Node`]'s `Display`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
