use wayfarer_routing::{routing::routing_algorithm::RoutingAlgorithm, terrain::Cell};

/// Algorithms to run, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSelection(pub Vec<RoutingAlgorithm>);

/// `all` or a single algorithm name.
pub fn parse_algorithms(input: &str) -> Result<AlgorithmSelection, String> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Ok(AlgorithmSelection(RoutingAlgorithm::ALL.to_vec()));
    }

    input
        .parse::<RoutingAlgorithm>()
        .map(|algorithm| AlgorithmSelection(vec![algorithm]))
        .map_err(|error| error.to_string())
}

/// `row,col`
pub fn parse_cell(input: &str) -> Result<Cell, String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("Invalid cell '{input}', expected row,col"))?;

    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid row '{row}'"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid column '{col}'"))?;

    Ok(Cell::new(row, col))
}
