use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::point::Point;

/// Index of a node in the graph arena. Ids of removed nodes are never
/// handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A point and its outgoing edges, keyed by the label of the neighbor.
///
/// Neighbors are referenced by id only, the graph owns every node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    point: Point,
    neighbors: BTreeMap<String, NodeId>,
}

impl Node {
    pub fn new(point: Point) -> Self {
        Node {
            point,
            neighbors: BTreeMap::new(),
        }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn label(&self) -> &str {
        self.point.label()
    }

    /// Outgoing edges in label order.
    pub fn neighbors(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.neighbors
            .iter()
            .map(|(label, node_id)| (label.as_str(), *node_id))
    }

    pub fn neighbor_labels(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(String::as_str)
    }

    pub fn has_neighbor(&self, label: &str) -> bool {
        self.neighbors.contains_key(label)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn neighbor_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.values().copied()
    }

    pub(crate) fn add_neighbor(&mut self, label: &str, node_id: NodeId) {
        self.neighbors.insert(label.to_string(), node_id);
    }

    pub(crate) fn remove_neighbor(&mut self, label: &str) -> bool {
        self.neighbors.remove(label).is_some()
    }
}

/// `"{label} : {x},{y} > n1 n2"`, the format the graph parser reads.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >", self.point)?;
        for label in self.neighbors.keys() {
            write!(f, " {label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let mut node = Node::new(Point::new("A", 0, 0));
        node.add_neighbor("C", NodeId(2));
        node.add_neighbor("B", NodeId(1));
        node.add_neighbor("B", NodeId(1));

        assert_eq!(node.degree(), 2);
        assert!(node.has_neighbor("B"));
        assert_eq!(
            node.neighbors().collect::<Vec<_>>(),
            vec![("B", NodeId(1)), ("C", NodeId(2))]
        );

        assert!(node.remove_neighbor("B"));
        assert!(!node.remove_neighbor("B"));
        assert_eq!(node.neighbor_labels().collect::<Vec<_>>(), vec!["C"]);
    }

    #[test]
    fn test_display() {
        let mut node = Node::new(Point::new("A", 1, -2));
        assert_eq!(node.to_string(), "A : 1,-2 >");

        node.add_neighbor("D", NodeId(3));
        node.add_neighbor("B", NodeId(1));
        assert_eq!(node.to_string(), "A : 1,-2 > B D");
    }
}
