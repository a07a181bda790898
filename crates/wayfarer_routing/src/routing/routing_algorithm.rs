use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::RoutingError, search_space::SearchSpace};

use super::{
    astar::AStar,
    dijkstra::Dijkstra,
    first_path::FirstPath,
    shortest_path_algorithm::{CalcPath, CalcPathOptions, CalcPathResult},
    uniform_cost::UniformCost,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    FirstPath,
    Dijkstra,
    #[serde(rename = "astar")]
    AStar,
    UniformCost,
}

impl RoutingAlgorithm {
    pub const ALL: [RoutingAlgorithm; 4] = [
        RoutingAlgorithm::FirstPath,
        RoutingAlgorithm::Dijkstra,
        RoutingAlgorithm::AStar,
        RoutingAlgorithm::UniformCost,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoutingAlgorithm::FirstPath => "first-path",
            RoutingAlgorithm::Dijkstra => "dijkstra",
            RoutingAlgorithm::AStar => "astar",
            RoutingAlgorithm::UniformCost => "uniform-cost",
        }
    }

    pub fn calc_path<S: SearchSpace>(
        self,
        space: &S,
        start: S::NodeId,
        end: S::NodeId,
        options: Option<CalcPathOptions>,
    ) -> Result<CalcPathResult<S::NodeId>, RoutingError> {
        match self {
            RoutingAlgorithm::FirstPath => FirstPath.calc_path(space, start, end, options),
            RoutingAlgorithm::Dijkstra => Dijkstra.calc_path(space, start, end, options),
            RoutingAlgorithm::AStar => AStar::new().calc_path(space, start, end, options),
            RoutingAlgorithm::UniformCost => {
                UniformCost::new().calc_path(space, start, end, options)
            }
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        RoutingAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| RoutingError::UnknownAlgorithm(s.to_string()))
    }
}
