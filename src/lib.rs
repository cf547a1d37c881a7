#![doc = include_str!("../README.md")]

mod error;
mod frontier;
mod graph;
mod model;
mod routing;

pub use error::{EmptyFrontierError, GraphError};
pub use frontier::{FrontierCursor, PriorityFrontier};
pub use graph::Graph;
pub use model::{Cost, Edge};
pub use routing::{Route, ShortestPaths};
