use crate::{
    graph::Graph,
    parsers::{TextParser, terrain_parser::TerrainParser},
    point::Point,
    terrain::TerrainMap,
};

pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomaniaCity {
    Arad,
    Bucharest,
    Craiova,
    Dobreta,
    Eforie,
    Fagaras,
    Giurgiu,
    Hirsova,
    Iasi,
    Lugoj,
    Mehadia,
    Neamt,
    Oradea,
    Pitesti,
    RimnicuVilcea,
    Sibiu,
    Timisoara,
    Urziceni,
    Vaslui,
    Zerind,
}

impl RomaniaCity {
    pub const ALL: [RomaniaCity; 20] = [
        RomaniaCity::Arad,
        RomaniaCity::Bucharest,
        RomaniaCity::Craiova,
        RomaniaCity::Dobreta,
        RomaniaCity::Eforie,
        RomaniaCity::Fagaras,
        RomaniaCity::Giurgiu,
        RomaniaCity::Hirsova,
        RomaniaCity::Iasi,
        RomaniaCity::Lugoj,
        RomaniaCity::Mehadia,
        RomaniaCity::Neamt,
        RomaniaCity::Oradea,
        RomaniaCity::Pitesti,
        RomaniaCity::RimnicuVilcea,
        RomaniaCity::Sibiu,
        RomaniaCity::Timisoara,
        RomaniaCity::Urziceni,
        RomaniaCity::Vaslui,
        RomaniaCity::Zerind,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RomaniaCity::Arad => "Arad",
            RomaniaCity::Bucharest => "Bucharest",
            RomaniaCity::Craiova => "Craiova",
            RomaniaCity::Dobreta => "Dobreta",
            RomaniaCity::Eforie => "Eforie",
            RomaniaCity::Fagaras => "Fagaras",
            RomaniaCity::Giurgiu => "Giurgiu",
            RomaniaCity::Hirsova => "Hirsova",
            RomaniaCity::Iasi => "Iasi",
            RomaniaCity::Lugoj => "Lugoj",
            RomaniaCity::Mehadia => "Mehadia",
            RomaniaCity::Neamt => "Neamt",
            RomaniaCity::Oradea => "Oradea",
            RomaniaCity::Pitesti => "Pitesti",
            RomaniaCity::RimnicuVilcea => "RimnicuVilcea",
            RomaniaCity::Sibiu => "Sibiu",
            RomaniaCity::Timisoara => "Timisoara",
            RomaniaCity::Urziceni => "Urziceni",
            RomaniaCity::Vaslui => "Vaslui",
            RomaniaCity::Zerind => "Zerind",
        }
    }

    // Map coordinates of the classic road map of Romania
    fn coordinates(self) -> (i32, i32) {
        match self {
            RomaniaCity::Arad => (91, 492),
            RomaniaCity::Bucharest => (400, 327),
            RomaniaCity::Craiova => (253, 288),
            RomaniaCity::Dobreta => (165, 299),
            RomaniaCity::Eforie => (562, 293),
            RomaniaCity::Fagaras => (305, 449),
            RomaniaCity::Giurgiu => (375, 270),
            RomaniaCity::Hirsova => (534, 350),
            RomaniaCity::Iasi => (473, 506),
            RomaniaCity::Lugoj => (165, 379),
            RomaniaCity::Mehadia => (168, 339),
            RomaniaCity::Neamt => (406, 537),
            RomaniaCity::Oradea => (131, 571),
            RomaniaCity::Pitesti => (320, 368),
            RomaniaCity::RimnicuVilcea => (233, 410),
            RomaniaCity::Sibiu => (207, 457),
            RomaniaCity::Timisoara => (94, 410),
            RomaniaCity::Urziceni => (456, 350),
            RomaniaCity::Vaslui => (509, 444),
            RomaniaCity::Zerind => (108, 531),
        }
    }

    pub fn point(self) -> Point {
        let (x, y) = self.coordinates();
        Point::new(self.label(), x, y)
    }
}

fn get_romania_roads() -> Vec<(RomaniaCity, RomaniaCity)> {
    use RomaniaCity::*;

    vec![
        (Oradea, Zerind),
        (Oradea, Sibiu),
        (Zerind, Arad),
        (Arad, Sibiu),
        (Arad, Timisoara),
        (Timisoara, Lugoj),
        (Lugoj, Mehadia),
        (Mehadia, Dobreta),
        (Dobreta, Craiova),
        (Craiova, RimnicuVilcea),
        (Craiova, Pitesti),
        (RimnicuVilcea, Pitesti),
        (RimnicuVilcea, Sibiu),
        (Sibiu, Fagaras),
        (Fagaras, Bucharest),
        (Pitesti, Bucharest),
        (Bucharest, Giurgiu),
        (Bucharest, Urziceni),
        (Urziceni, Hirsova),
        (Hirsova, Eforie),
        (Urziceni, Vaslui),
        (Vaslui, Iasi),
        (Iasi, Neamt),
    ]
}

/// Every road is two-way.
pub fn create_romania_graph() -> Graph {
    let mut graph = Graph::new();

    for city in RomaniaCity::ALL {
        graph.add_node(city.point()).unwrap();
    }

    for (from, to) in get_romania_roads() {
        graph.add_edge(from.label(), to.label()).unwrap();
        graph.add_edge(to.label(), from.label()).unwrap();
    }

    graph
}

pub fn create_graph(points: &[(&str, i32, i32)], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();

    for (label, x, y) in points {
        graph.add_node(Point::new(*label, *x, *y)).unwrap();
    }

    for (from, to) in edges {
        graph.add_edge(from, to).unwrap();
    }

    graph
}

/// A(0,0) -> B(1,0) -> C(2,0)
pub fn create_line_graph() -> Graph {
    create_graph(
        &[("A", 0, 0), ("B", 1, 0), ("C", 2, 0)],
        &[("A", "B"), ("B", "C")],
    )
}

/// The line graph plus Z(5,5), which nothing links to.
pub fn create_disconnected_graph() -> Graph {
    create_graph(
        &[("A", 0, 0), ("B", 1, 0), ("C", 2, 0), ("Z", 5, 5)],
        &[("A", "B"), ("B", "C"), ("Z", "A")],
    )
}

/// S reaches T in two hops through the far away B, or in three short hops
/// along C and D.
pub fn create_detour_graph() -> Graph {
    create_graph(
        &[("S", 0, 0), ("B", 0, 10), ("C", 3, 0), ("D", 7, 0), ("T", 10, 0)],
        &[("S", "B"), ("B", "T"), ("S", "C"), ("C", "D"), ("D", "T")],
    )
}

/// Two routes with the same hop count, the first one expanded being the
/// longer one.
pub fn create_improvement_graph() -> Graph {
    create_graph(
        &[("S", 0, 0), ("A", 0, 8), ("B", 4, 1), ("T", 8, 0)],
        &[("S", "A"), ("S", "B"), ("A", "T"), ("B", "T")],
    )
}

pub const MAZE_TERRAIN: &str = "\
.....
.###.
.#...
.#.#.
...#.
";

pub const WALLED_TERRAIN: &str = "\
..#..
..#..
###..
.....
";

pub const OPEN_TERRAIN: &str = "\
......
......
......
";

pub fn create_terrain(text: &str) -> TerrainMap {
    TerrainParser.parse_str(text).unwrap()
}

pub fn labels(path: &[&str]) -> Vec<String> {
    path.iter().map(|label| label.to_string()).collect()
}
