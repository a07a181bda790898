pub mod astar;
pub mod astar_heuristic;
pub mod dijkstra;
mod fifo_search;
pub mod first_path;
pub mod instrumentation;
pub mod node_state;
pub mod routing_algorithm;
pub mod routing_path;
pub mod shortest_path_algorithm;
pub mod uniform_cost;
