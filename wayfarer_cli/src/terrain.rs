use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayfarer_routing::{
    parsers::{TextParser, terrain_parser::TerrainParser},
    routing::shortest_path_algorithm::CalcPathOptions,
    terrain::Cell,
};

use crate::{
    parsers::{self, AlgorithmSelection},
    report::{RunReport, print_reports},
};

#[derive(Args)]
pub struct TerrainArgs {
    /// Terrain file, `#` for blocked cells and `.` for open ones
    #[arg(short, long)]
    file: PathBuf,

    /// Start cell as row,col
    #[arg(long, value_parser = parsers::parse_cell)]
    from: Cell,

    /// Target cell as row,col
    #[arg(long, value_parser = parsers::parse_cell)]
    to: Cell,

    /// first-path, dijkstra, astar, uniform-cost or all
    #[arg(short, long, value_parser = parsers::parse_algorithms, default_value = "all")]
    algorithm: AlgorithmSelection,

    #[arg(long)]
    json: bool,

    /// List the cells in the order they were expanded
    #[arg(long)]
    debug_info: bool,
}

pub fn run(args: TerrainArgs) -> Result<(), anyhow::Error> {
    info!("Loading terrain {:?}", args.file);
    let mut terrain = TerrainParser.parse(&args.file)?;
    info!(
        rows = terrain.rows(),
        cols = terrain.cols(),
        open = terrain.open_count(),
        "Terrain loaded"
    );

    // Explored cells are always collected for the rendered map
    let options = CalcPathOptions {
        include_debug_info: Some(true),
    };

    let mut reports = Vec::with_capacity(args.algorithm.0.len());
    for algorithm in args.algorithm.0 {
        let result = terrain.route(algorithm, args.from, args.to, Some(options))?;

        let visited = result
            .debug
            .as_ref()
            .map_or(&[][..], |debug| debug.visited_nodes.as_slice());
        let map = terrain.render(result.path.as_ref().map(|path| path.nodes()), visited);

        let mut report = RunReport::new(algorithm, &result, args.debug_info);
        report.map = Some(map);
        reports.push(report);
    }

    print_reports(&reports, args.json)
}
