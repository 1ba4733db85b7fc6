//! Keyed graphs and graph-backed domain structures.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the general adjacency-list [`Graph`] and its algorithms
//! - `specialized`: domain wrappers built on top of [`Graph`]

pub mod basic;
pub mod specialized;
pub(crate) mod access;

pub use basic::{Bfs, Dfs, Graph, GraphOptions};
pub use specialized::{PriceComparisonGraph, PriceNode};
