pub mod error;
pub mod graph;
pub mod node;
pub mod parsers;
pub mod point;
pub mod priority_queue;
pub mod routing;
pub mod search_space;
mod stopwatch;
pub mod terrain;

#[cfg(test)]
pub(crate) mod test_graph_utils;
