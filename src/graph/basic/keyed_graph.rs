//! A keyed adjacency-list graph, directed or undirected, with edge weights.
//!
//! Vertices are arbitrary hashable keys kept in enumeration (insertion) order.
//! Internally every vertex has a position; adjacency lists and the weight map
//! are expressed in positions so traversals work on dense `usize` indices:
//! - `adjacency[u]` lists the out-neighbors of `u` in insertion order, no duplicates
//! - `weights[(u, v)]` holds the weight of the directed edge `u -> v`
//!
//! Undirected graphs mirror every edge and weight in both directions.
//! Removing a vertex drops its incident edges and shifts later positions down
//! by one, so the enumeration order of the surviving vertices is unchanged.

use crate::invariant::invariant_assert_msg;
use core::fmt;
use core::hash::Hash;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Construction options for [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Whether edges are one-way.
    pub directed: bool,
    /// Hop limit used by [`Graph::find_all_paths_default`].
    pub max_path_depth: usize,
}

impl GraphOptions {
    /// Default hop limit for path enumeration.
    pub const DEFAULT_MAX_PATH_DEPTH: usize = 10;
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: false,
            max_path_depth: Self::DEFAULT_MAX_PATH_DEPTH,
        }
    }
}

/// A dynamic adjacency-list graph keyed by `V` with `W` edge weights.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to internal vectors |
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `remove_vertex` | \(O(n + m)\) | Rewrites every adjacency list and the weight map |
/// | `has_edge` / `edge_weight` | \(O(1)\) | Weight map lookup |
#[derive(Clone)]
pub struct Graph<V, W = u32> {
    pub(super) vertices: Vec<V>,
    pub(super) index: HashMap<V, usize>,
    pub(super) adjacency: Vec<Vec<usize>>,
    pub(super) weights: HashMap<(usize, usize), W>,
    pub(super) directed: bool,
    pub(super) max_path_depth: usize,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self::from_options(GraphOptions {
            directed,
            ..GraphOptions::default()
        })
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph configured by `options`.
    pub fn from_options(options: GraphOptions) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
            directed: options.directed,
            max_path_depth: options.max_path_depth,
        }
    }

    /// Returns `true` if edges are one-way.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the options this graph was built with.
    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.directed,
            max_path_depth: self.max_path_depth,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let directed_edges: usize = self.adjacency.iter().map(Vec::len).sum();
        if self.directed {
            directed_edges
        } else {
            let self_loops = self
                .adjacency
                .iter()
                .enumerate()
                .filter(|(u, nbrs)| nbrs.contains(u))
                .count();
            (directed_edges + self_loops) / 2
        }
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Position of `vertex` in enumeration order.
    #[inline]
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Vertex at enumeration position `position`.
    #[inline]
    pub fn vertex_at(&self, position: usize) -> Option<&V> {
        self.vertices.get(position)
    }

    /// Iterates vertices in enumeration order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Adds `vertex`; returns `false` if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.insert_vertex(vertex);
        true
    }

    fn insert_vertex(&mut self, vertex: V) -> usize {
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        trace_event!(position = idx, "vertex added");
        idx
    }

    fn ensure_vertex(&mut self, vertex: V) -> usize {
        match self.index.get(&vertex) {
            Some(&idx) => idx,
            None => self.insert_vertex(vertex),
        }
    }

    fn link(&mut self, from: usize, to: usize, weight: W) {
        let nbrs = &mut self.adjacency[from];
        if !nbrs.contains(&to) {
            nbrs.push(to);
        }
        self.weights.insert((from, to), weight);
    }

    fn unlink(&mut self, from: usize, to: usize) -> bool {
        let nbrs = &mut self.adjacency[from];
        let before = nbrs.len();
        nbrs.retain(|&v| v != to);
        self.weights.remove(&(from, to));
        before != nbrs.len()
    }

    /// Adds an edge of weight `weight`, creating missing endpoints.
    ///
    /// Re-adding an existing edge overwrites its weight. Undirected graphs
    /// mirror the edge and its weight.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: W) {
        let f = self.ensure_vertex(from);
        let t = self.ensure_vertex(to);
        self.link(f, t, weight);
        if !self.directed {
            self.link(t, f, weight);
        }
        trace_event!(from = f, to = t, directed = self.directed, "edge added");
    }

    /// Removes the edge between `from` and `to`; returns whether it existed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let (Some(f), Some(t)) = (self.position(from), self.position(to)) else {
            return false;
        };
        let removed = self.unlink(f, t);
        if !self.directed {
            self.unlink(t, f);
        }
        removed
    }

    /// Removes `vertex` and every incident edge; returns whether it existed.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(removed) = self.index.remove(vertex) else {
            return false;
        };
        let shift = |v: usize| if v > removed { v - 1 } else { v };

        self.vertices.remove(removed);
        self.adjacency.remove(removed);
        for nbrs in &mut self.adjacency {
            nbrs.retain(|&v| v != removed);
            for v in nbrs.iter_mut() {
                *v = shift(*v);
            }
        }

        self.weights = self
            .weights
            .drain()
            .filter(|&((u, v), _)| u != removed && v != removed)
            .map(|((u, v), w)| ((shift(u), shift(v)), w))
            .collect();

        for idx in self.index.values_mut() {
            *idx = shift(*idx);
        }
        trace_event!(position = removed, "vertex removed");
        true
    }

    /// Returns the neighbors of `vertex` (out-neighbors when directed).
    ///
    /// Empty for unknown vertices.
    pub fn neighbors(&self, vertex: &V) -> Vec<&V> {
        self.position(vertex)
            .map(|u| self.adjacency[u].iter().map(|&v| &self.vertices[v]).collect())
            .unwrap_or_default()
    }

    /// Out-degree of `vertex` (0 for unknown vertices).
    pub fn degree(&self, vertex: &V) -> usize {
        self.position(vertex).map_or(0, |u| self.adjacency[u].len())
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Weight of the edge `from -> to`, or `None` if absent.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let f = self.position(from)?;
        let t = self.position(to)?;
        self.weights.get(&(f, t)).copied()
    }

    /// Lists edges as `(from, to, weight)`.
    ///
    /// Undirected edges are listed once, from the earlier-enumerated endpoint.
    pub fn edges(&self) -> Vec<(&V, &V, W)> {
        let mut edges = Vec::new();
        for (u, nbrs) in self.adjacency.iter().enumerate() {
            for &v in nbrs {
                if !self.directed && v < u {
                    continue;
                }
                if let Some(&w) = self.weights.get(&(u, v)) {
                    edges.push((&self.vertices[u], &self.vertices[v], w));
                }
            }
        }
        edges
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.adjacency.clear();
        self.weights.clear();
    }

    /// Checks that positions, adjacency lists and weights agree, and that
    /// undirected edges are mirrored.
    ///
    /// Returns `true` if all invariants hold; debug builds also assert.
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();
        let shape_ok = self.adjacency.len() == n && self.index.len() == n;
        let index_ok = self
            .vertices
            .iter()
            .enumerate()
            .all(|(i, v)| self.index.get(v) == Some(&i));

        let mut weights_ok = true;
        let mut mirror_ok = true;
        let mut edges = 0usize;
        for (u, nbrs) in self.adjacency.iter().enumerate() {
            for &v in nbrs {
                edges += 1;
                weights_ok &= v < n && self.weights.contains_key(&(u, v));
                if !self.directed {
                    mirror_ok &= self.adjacency.get(v).is_some_and(|back| back.contains(&u));
                }
            }
        }
        weights_ok &= edges == self.weights.len();

        invariant_assert_msg(shape_ok, "adjacency and index must cover every vertex");
        invariant_assert_msg(index_ok, "index must map each vertex to its position");
        invariant_assert_msg(weights_ok, "every adjacency entry must carry exactly one weight");
        invariant_assert_msg(mirror_ok, "undirected edges must be mirrored");
        shape_ok && index_ok && weights_ok && mirror_ok
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy + One,
{
    /// Adds an edge of unit weight, creating missing endpoints.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_weighted_edge(from, to, W::one());
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn default() -> Self {
        Self::from_options(GraphOptions::default())
    }
}

impl<V: fmt::Debug, W> fmt::Debug for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("vertices", &self.vertices)
            .field("edges", &self.weights.len())
            .finish()
    }
}
