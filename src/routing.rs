use std::collections::hash_map;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Cost, Graph, GraphError, PriorityFrontier};

/// A shortest route from an origin to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Node labels in traversal order, origin first and destination last.
    pub nodes: Vec<String>,
    /// Sum of the edge costs along consecutive node pairs.
    pub cost: Cost,
}

/// Shortest routes keyed by destination label.
///
/// The query origin is never a key and unreachable destinations are absent.
/// Single-target queries also return this type, holding exactly one entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShortestPaths(FxHashMap<String, Route>);

impl ShortestPaths {
    pub(crate) fn single(destination: String, route: Route) -> Self {
        Self(FxHashMap::from_iter([(destination, route)]))
    }

    pub(crate) fn take(&mut self, destination: &str) -> Option<Route> {
        self.0.remove(destination)
    }

    pub fn get(&self, destination: &str) -> Option<&Route> {
        self.0.get(destination)
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.0.contains_key(destination)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an iterator over (destination, route) pairs, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.0.iter().map(|(label, route)| (label.as_str(), route))
    }
}

impl IntoIterator for ShortestPaths {
    type Item = (String, Route);
    type IntoIter = hash_map::IntoIter<String, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Runs Dijkstra's algorithm from the origin over the whole graph and
/// reconstructs one route per reachable node.
/// The origin is assumed to belong to the graph.
pub(crate) fn explore(graph: &Graph, origin: &str) -> Result<ShortestPaths, GraphError> {
    debug!("Computing shortest paths from {origin:?}");

    // (current) shortest distance from origin to this node
    let mut distances = FxHashMap::from_iter([(origin, Cost::ZERO)]);

    // previous node (value) on the best known route from origin to this node (key)
    let mut predecessors: FxHashMap<&str, &str> = FxHashMap::default();

    // priority frontier of discovered nodes that may need to be visited
    let mut frontier = PriorityFrontier::new();
    frontier.insert(origin, Cost::ZERO);

    while !frontier.is_empty() {
        let (node, distance) = frontier.extract_min()?;

        // check if we already know a cheaper way to get to this node: entries
        // left behind by an earlier, since improved relaxation are stale
        let shortest = distances.get(node).copied().unwrap_or(Cost::MAX);
        if distance > shortest {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(node) {
            let neighbor = neighbor.as_str();
            let candidate = distance + *weight;
            let shortest = distances.get(neighbor).copied().unwrap_or(Cost::MAX);

            // check if we can follow the current route to reach the neighbor
            // in a cheaper way
            if candidate < shortest {
                // Relax: we have now found a better way that we are going to explore
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, node);
                frontier.insert(neighbor, candidate);
            }
        }
    }

    let mut paths = FxHashMap::default();

    for (&destination, &cost) in &distances {
        if destination == origin {
            continue;
        }

        // Unpacking: walk the route from destination back to origin
        let mut nodes = vec![destination];
        let mut next = destination;
        while let Some(&previous) = predecessors.get(next) {
            next = previous;
            nodes.push(previous);
        }
        nodes.reverse();

        let route = Route {
            nodes: nodes.into_iter().map(str::to_owned).collect(),
            cost,
        };
        paths.insert(destination.to_owned(), route);
    }

    Ok(ShortestPaths(paths))
}
