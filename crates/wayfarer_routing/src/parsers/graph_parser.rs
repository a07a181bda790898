use tracing::{info, warn};

use crate::{error::ParseError, graph::Graph, point::Point};

use super::TextParser;

/// Reads graphs written one node per line:
///
/// ```text
/// Arad : 91,492 > Sibiu Timisoara Zerind
/// ```
///
/// Nodes are all added before any edge, so a line may link to a node
/// declared further down. Links to labels that are never declared are
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphParser;

struct NodeLine<'a> {
    point: Point,
    links: Vec<&'a str>,
}

impl GraphParser {
    fn parse_line(line_number: usize, line: &str) -> Result<NodeLine<'_>, ParseError> {
        let invalid = || ParseError::InvalidPoint {
            line: line_number,
            text: line.to_string(),
        };

        let (point, links) = line.split_once('>').unwrap_or((line, ""));
        let (label, coordinates) = point.split_once(':').ok_or_else(invalid)?;
        let (x, y) = coordinates.split_once(',').ok_or_else(invalid)?;

        let label = label.trim();
        if label.is_empty() || label.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(NodeLine {
            point: Point::new(label, x, y),
            links: links.split_whitespace().collect(),
        })
    }
}

impl TextParser for GraphParser {
    type Output = Graph;

    fn parse_str(&self, input: &str) -> Result<Graph, ParseError> {
        let lines = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| GraphParser::parse_line(index + 1, line))
            .collect::<Result<Vec<_>, _>>()?;

        let mut graph = Graph::new();
        for line in lines.iter() {
            graph.add_node(line.point.clone())?;
        }

        let mut skipped = 0;
        for line in lines.iter() {
            for link in line.links.iter() {
                if !graph.contains(link) {
                    warn!(from = line.point.label(), to = *link, "Skipping link to unknown node");
                    skipped += 1;
                    continue;
                }

                graph.add_edge(line.point.label(), link)?;
            }
        }

        info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            skipped,
            "Graph parsed"
        );

        Ok(graph)
    }
}
