use rustc_hash::FxHashMap;

use crate::routing::explore;
use crate::{Cost, Edge, GraphError, ShortestPaths};

/// Undirected weighted graph over labelled nodes.
///
/// The node set and edges are fixed at construction; queries are read-only,
/// so a Graph can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// node label -> list of (neighbor label, edge cost).
    /// Every node has an entry; isolated nodes map to an empty list.
    adjacency: FxHashMap<String, Vec<(String, Cost)>>,
}

impl Graph {
    /// Builds a graph from node labels and explicit undirected edges.
    /// Every edge endpoint must be a declared node, weights must be
    /// non-negative and self-loops are rejected.
    pub fn from_edges<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        E: IntoIterator<Item = Edge>,
    {
        let mut adjacency: FxHashMap<String, Vec<(String, Cost)>> = nodes
            .into_iter()
            .map(|label| (label.into(), vec![]))
            .collect();

        for Edge { a, b, weight } in edges {
            if !adjacency.contains_key(&a) {
                return Err(GraphError::UnknownNode(a));
            }
            if !adjacency.contains_key(&b) {
                return Err(GraphError::UnknownNode(b));
            }
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }

            let cost = Cost::new(weight).ok_or_else(|| GraphError::InvalidWeight {
                a: a.clone(),
                b: b.clone(),
                weight,
            })?;

            // symmetric: both traversal directions cost the same
            if let Some(list) = adjacency.get_mut(&a) {
                list.push((b.clone(), cost));
            }
            if let Some(list) = adjacency.get_mut(&b) {
                list.push((a, cost));
            }
        }

        Ok(Self { adjacency })
    }

    /// Builds a graph from a square adjacency matrix in node-label order,
    /// where a zero entry means "no edge" and a positive entry is a weight.
    /// The matrix must be symmetric and have a zero diagonal.
    pub fn from_matrix<N>(nodes: N, matrix: &[Vec<f64>]) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let labels: Vec<String> = nodes.into_iter().map(Into::into).collect();
        let expected = labels.len();

        if matrix.len() != expected || matrix.iter().any(|row| row.len() != expected) {
            return Err(GraphError::MatrixShape { expected });
        }

        let mut edges = vec![];

        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight < 0.0 || weight.is_nan() {
                    return Err(GraphError::InvalidWeight {
                        a: labels[i].clone(),
                        b: labels[j].clone(),
                        weight,
                    });
                }

                if weight == 0.0 {
                    continue;
                }

                if i == j {
                    return Err(GraphError::SelfLoop(labels[i].clone()));
                }

                if matrix[j][i] != weight {
                    return Err(GraphError::AsymmetricWeight {
                        a: labels[i].clone(),
                        b: labels[j].clone(),
                    });
                }

                // keep the upper triangle, the lower one repeats it
                if i < j {
                    edges.push(Edge::new(labels[i].clone(), labels[j].clone(), weight));
                }
            }
        }

        Self::from_edges(labels, edges)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Gets an iterator over all the node labels, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub(crate) fn neighbors(&self, label: &str) -> &[(String, Cost)] {
        self.adjacency.get(label).map_or(&[], Vec::as_slice)
    }

    /// Computes the shortest routes from origin to every reachable node.
    /// The origin itself is never a key of the result and unreachable nodes
    /// are omitted rather than errored.
    pub fn shortest_paths(&self, origin: &str) -> Result<ShortestPaths, GraphError> {
        if !self.contains(origin) {
            return Err(GraphError::UnknownNode(origin.to_owned()));
        }

        explore(self, origin)
    }

    /// Computes the shortest route from origin to a single destination,
    /// returned as a one-entry mapping keyed by the destination for symmetry
    /// with [`Self::shortest_paths`].
    pub fn shortest_path(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<ShortestPaths, GraphError> {
        if origin == destination {
            return Err(GraphError::SameOriginAndDestination(origin.to_owned()));
        }
        if !self.contains(destination) {
            return Err(GraphError::UnknownNode(destination.to_owned()));
        }

        let mut paths = self.shortest_paths(origin)?;

        match paths.take(destination) {
            Some(route) => Ok(ShortestPaths::single(destination.to_owned(), route)),
            None => Err(GraphError::NoPathFound {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            }),
        }
    }
}
