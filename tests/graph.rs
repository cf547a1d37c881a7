mod fixture;

use test_log::test;
use wayfinder::{Edge, Graph, GraphError};

use crate::fixture::{CITIES, CITY_GRAPH};

#[test]
fn graph_construction_001() {
    let graph: &Graph = &CITY_GRAPH;

    assert_eq!(graph.nodes().count(), CITIES.len());
    for city in CITIES {
        assert!(graph.contains(city));
    }
}

#[test]
fn graph_construction_002() {
    // the matrix form and the edge-list form build the same graph
    let from_edges = Graph::from_edges(
        CITIES,
        [
            Edge::new("Logroño", "Zaragoza", 4.0),
            Edge::new("Logroño", "Teruel", 6.0),
            Edge::new("Logroño", "Madrid", 8.0),
            Edge::new("Zaragoza", "Teruel", 2.0),
            Edge::new("Zaragoza", "Lleida", 2.0),
            Edge::new("Teruel", "Madrid", 3.0),
            Edge::new("Teruel", "Lleida", 5.0),
            Edge::new("Teruel", "Alicante", 7.0),
            Edge::new("Lleida", "Castellón", 4.0),
            Edge::new("Lleida", "Segovia", 8.0),
            Edge::new("Alicante", "Castellón", 3.0),
            Edge::new("Alicante", "Ciudad Real", 7.0),
            Edge::new("Castellón", "Ciudad Real", 6.0),
            Edge::new("Segovia", "Ciudad Real", 4.0),
        ],
    )
    .unwrap();

    assert_eq!(&from_edges, &*CITY_GRAPH);
}

#[test]
fn graph_construction_003() {
    let error = Graph::from_matrix(CITIES, &vec![vec![0.0; 9]; 3]).unwrap_err();
    assert_eq!(error, GraphError::MatrixShape { expected: 9 });
}

#[test]
fn graph_construction_004() {
    let mut asymmetric = vec![vec![0.0; 2]; 2];
    asymmetric[0][1] = 1.0;
    asymmetric[1][0] = 3.0;

    let error = Graph::from_matrix(["Santiago", "Ourense"], &asymmetric).unwrap_err();
    assert_eq!(
        error,
        GraphError::AsymmetricWeight {
            a: "Santiago".to_owned(),
            b: "Ourense".to_owned(),
        }
    );
}
