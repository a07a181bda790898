use std::fmt::Display;

use comfy_table::Table;
use serde::Serialize;
use wayfarer_routing::routing::{
    routing_algorithm::RoutingAlgorithm, shortest_path_algorithm::CalcPathResult,
};

#[derive(Serialize)]
pub struct RunReport {
    pub algorithm: RoutingAlgorithm,
    pub path: Option<Vec<String>>,
    pub queue_insertions: usize,
    pub traveled_distance: f64,
    pub iterations: usize,
    pub nodes_reached: usize,
    pub elapsed_us: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visited: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

impl RunReport {
    pub fn new<Id: Display>(
        algorithm: RoutingAlgorithm,
        result: &CalcPathResult<Id>,
        include_visited: bool,
    ) -> Self {
        let to_strings =
            |nodes: &[Id]| -> Vec<String> { nodes.iter().map(ToString::to_string).collect() };

        RunReport {
            algorithm,
            path: result.path.as_ref().map(|path| to_strings(path.nodes())),
            queue_insertions: result.statistics.queue_insertions,
            traveled_distance: result.traveled_distance(),
            iterations: result.statistics.iterations,
            nodes_reached: result.statistics.nodes_reached,
            elapsed_us: result.statistics.elapsed.as_micros(),
            visited: result
                .debug
                .as_ref()
                .filter(|_| include_visited)
                .map(|debug| to_strings(&debug.visited_nodes)),
            map: None,
        }
    }
}

pub fn print_reports(reports: &[RunReport], json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Algorithm",
        "Path",
        "Insertions",
        "Distance",
        "Iterations",
        "Reached",
        "Elapsed",
    ]);

    for report in reports {
        table.add_row(vec![
            report.algorithm.to_string(),
            report
                .path
                .as_ref()
                .map_or_else(|| String::from("no route"), |path| path.join(" ")),
            report.queue_insertions.to_string(),
            format!("{:.3}", report.traveled_distance),
            report.iterations.to_string(),
            report.nodes_reached.to_string(),
            format!("{}µs", report.elapsed_us),
        ]);
    }

    println!("{table}");

    for report in reports {
        if let Some(visited) = &report.visited {
            println!("{} visited: {}", report.algorithm, visited.join(" "));
        }

        if let Some(map) = &report.map {
            println!("\n{}\n{map}", report.algorithm);
        }
    }

    Ok(())
}
