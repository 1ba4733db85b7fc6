//! Domain graphs composed from [`Graph`](crate::graph::Graph).

pub mod price_graph;

pub use price_graph::{PriceComparisonGraph, PriceNode};
