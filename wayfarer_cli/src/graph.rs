use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayfarer_routing::{
    parsers::{TextParser, graph_parser::GraphParser},
    routing::shortest_path_algorithm::CalcPathOptions,
};

use crate::{
    parsers::{self, AlgorithmSelection},
    report::{RunReport, print_reports},
};

#[derive(Args)]
pub struct GraphArgs {
    /// Graph file, one `Label : x,y > n1 n2` line per node
    #[arg(short, long)]
    file: PathBuf,

    #[arg(long)]
    from: String,

    #[arg(long)]
    to: String,

    /// first-path, dijkstra, astar, uniform-cost or all
    #[arg(short, long, value_parser = parsers::parse_algorithms, default_value = "all")]
    algorithm: AlgorithmSelection,

    #[arg(long)]
    json: bool,

    /// List the nodes in the order they were expanded
    #[arg(long)]
    debug_info: bool,
}

pub fn run(args: GraphArgs) -> Result<(), anyhow::Error> {
    info!("Loading graph {:?}", args.file);
    let mut graph = GraphParser.parse(&args.file)?;

    let options = CalcPathOptions {
        include_debug_info: Some(args.debug_info),
    };

    let mut reports = Vec::with_capacity(args.algorithm.0.len());
    for algorithm in args.algorithm.0 {
        let result = graph.route(algorithm, &args.from, &args.to, Some(options))?;
        reports.push(RunReport::new(algorithm, &result, args.debug_info));
    }

    print_reports(&reports, args.json)
}
