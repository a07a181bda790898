use serde::Serialize;

/// Ordered nodes from start to target, both included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingPath<Id> {
    nodes: Vec<Id>,
    distance: f64,
}

impl<Id> RoutingPath<Id> {
    pub fn new(nodes: Vec<Id>, distance: f64) -> RoutingPath<Id> {
        RoutingPath { nodes, distance }
    }

    pub fn nodes(&self) -> &[Id] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Id> {
        self.nodes
    }

    /// Accumulated cost recorded on the target when the search stopped.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&Id> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&Id> {
        self.nodes.last()
    }

    pub fn map<T>(self, f: impl FnMut(Id) -> T) -> RoutingPath<T> {
        RoutingPath {
            nodes: self.nodes.into_iter().map(f).collect(),
            distance: self.distance,
        }
    }
}
