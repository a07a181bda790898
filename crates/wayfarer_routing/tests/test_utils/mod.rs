#![allow(dead_code)]

use std::{collections::VecDeque, path::PathBuf};

use fxhash::FxHashMap;
use rand::{Rng, rngs::StdRng};
use wayfarer_routing::{graph::Graph, point::Point};

pub const EPSILON: f64 = 1e-6;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn create_random_graph(rng: &mut StdRng, size: usize, edge_probability: f64) -> Graph {
    let mut graph = Graph::new();

    for index in 0..size {
        graph
            .add_node(Point::new(
                format!("N{index}"),
                rng.random_range(-50..50),
                rng.random_range(-50..50),
            ))
            .unwrap();
    }

    for from in 0..size {
        for to in 0..size {
            if from != to && rng.random_bool(edge_probability) {
                graph.add_edge(&format!("N{from}"), &format!("N{to}")).unwrap();
            }
        }
    }

    graph
}

/// All-pairs shortest distances and fewest hops, indexed by label.
pub struct Reference {
    indices: FxHashMap<String, usize>,
    distances: Vec<Vec<f64>>,
    hops: Vec<Vec<Option<usize>>>,
}

impl Reference {
    pub fn new(graph: &Graph) -> Self {
        let labels: Vec<String> = graph.nodes().map(|node| node.label().to_string()).collect();
        let indices: FxHashMap<String, usize> = labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.clone(), index))
            .collect();
        let size = labels.len();

        let mut adjacency = vec![Vec::new(); size];
        let mut distances = vec![vec![f64::INFINITY; size]; size];

        for node in graph.nodes() {
            let from = indices[node.label()];
            distances[from][from] = 0.0;

            for (label, _) in node.neighbors() {
                let to = indices[label];
                let length = node.point().distance(graph.node(label).unwrap().point());
                adjacency[from].push(to);
                distances[from][to] = distances[from][to].min(length);
            }
        }

        // Floyd-Warshall
        for k in 0..size {
            for i in 0..size {
                for j in 0..size {
                    let through = distances[i][k] + distances[k][j];
                    if through < distances[i][j] {
                        distances[i][j] = through;
                    }
                }
            }
        }

        let hops = (0..size)
            .map(|start| {
                let mut hops = vec![None; size];
                hops[start] = Some(0);

                let mut queue = VecDeque::from([start]);
                while let Some(current) = queue.pop_front() {
                    let next = hops[current].map(|hops| hops + 1);
                    for &adj in adjacency[current].iter() {
                        if hops[adj].is_none() {
                            hops[adj] = next;
                            queue.push_back(adj);
                        }
                    }
                }

                hops
            })
            .collect();

        Reference {
            indices,
            distances,
            hops,
        }
    }

    pub fn distance(&self, from: &str, to: &str) -> f64 {
        self.distances[self.indices[from]][self.indices[to]]
    }

    pub fn hops(&self, from: &str, to: &str) -> Option<usize> {
        self.hops[self.indices[from]][self.indices[to]]
    }
}

/// Sum of the edge lengths along `path`, `None` if two consecutive labels
/// are not linked.
pub fn path_length(graph: &Graph, path: &[String]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |length, pair| {
        let from = graph.node(&pair[0])?;
        let to = graph.node(&pair[1])?;

        from.has_neighbor(to.label())
            .then(|| length + from.point().distance(to.point()))
    })
}
