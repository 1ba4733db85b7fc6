//! The general-purpose keyed graph.

pub mod algorithms;
pub mod keyed_graph;

pub use algorithms::{Bfs, Dfs};
pub use keyed_graph::{Graph, GraphOptions};
