use clap::{Parser, Subcommand};

use crate::{graph::GraphArgs, terrain::TerrainArgs};

mod graph;
mod parsers;
mod report;
mod terrain;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route between two labelled points of a graph file
    #[command(visible_alias = "g")]
    Graph {
        #[command(flatten)]
        args: GraphArgs,
    },
    /// Route between two cells of a terrain file
    #[command(visible_alias = "t")]
    Terrain {
        #[command(flatten)]
        args: TerrainArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Graph { args } => graph::run(args)?,
        Commands::Terrain { args } => terrain::run(args)?,
    }

    Ok(())
}
