use thiserror::Error;

/// Contract violations while building or mutating a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Ambiguous graph: node {0} already exists")]
    AmbiguousNode(String),
    #[error("Node {0} does not exist in graph")]
    NodeNotFound(String),
    #[error("Node(s) not in the graph: {from} -> {to}")]
    MissingEndpoint { from: String, to: String },
}

/// A search was asked to start or end somewhere that cannot be resolved.
///
/// Not finding a route is not an error, searches report it as an empty
/// path instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Cannot resolve node {0}")]
    UnresolvedNode(String),
    #[error("Cell ({row}, {col}) is outside of the terrain")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cell ({row}, {col}) is blocked")]
    BlockedCell { row: usize, col: usize },
    #[error("Unknown routing algorithm '{0}'")]
    UnknownAlgorithm(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("Terrain has no cells")]
    Empty,
    #[error("Terrain row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: '{text}' is not a point")]
    InvalidPoint { line: usize, text: String },
    #[error("Line {line}, column {column}: unexpected terrain character '{found}'")]
    InvalidTerrain {
        line: usize,
        column: usize,
        found: char,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}
