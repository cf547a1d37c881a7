use std::sync::LazyLock;

use wayfinder::Graph;

pub const CITIES: [&str; 9] = [
    "Logroño",
    "Zaragoza",
    "Teruel",
    "Madrid",
    "Lleida",
    "Alicante",
    "Castellón",
    "Segovia",
    "Ciudad Real",
];

/// Symmetric road network between nine Spanish cities, given as an adjacency
/// matrix in [`CITIES`] order where zero means no road.
pub static CITY_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    let connections = [
        [0.0, 4.0, 6.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [4.0, 0.0, 2.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0],
        [6.0, 2.0, 0.0, 3.0, 5.0, 7.0, 0.0, 0.0, 0.0],
        [8.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 5.0, 0.0, 0.0, 0.0, 4.0, 8.0, 0.0],
        [0.0, 0.0, 7.0, 0.0, 0.0, 0.0, 3.0, 0.0, 7.0],
        [0.0, 0.0, 0.0, 0.0, 4.0, 3.0, 0.0, 0.0, 6.0],
        [0.0, 0.0, 0.0, 0.0, 8.0, 0.0, 0.0, 0.0, 4.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 7.0, 6.0, 4.0, 0.0],
    ];

    let matrix: Vec<Vec<f64>> = connections.iter().map(|row| row.to_vec()).collect();
    Graph::from_matrix(CITIES, &matrix).expect("city network is a valid graph")
});
