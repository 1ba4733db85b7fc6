//! Traversals and path algorithms for [`Graph`].
//!
//! Everything here runs on vertex positions and translates back to keys at
//! the boundary. Neighbor order is adjacency insertion order, so results are
//! deterministic for a given construction sequence.

use super::keyed_graph::Graph;
use crate::collections::Queue;
use crate::graph::access::visited::VisitedFlags;
use core::hash::Hash;
use num_traits::Zero;

/// Breadth-first iterator yielding `(vertex, depth)` pairs.
///
/// Each reachable vertex is yielded exactly once, at its hop distance from
/// the start vertex.
pub struct Bfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    visited: VisitedFlags,
    queue: Queue<(usize, usize)>,
}

impl<'a, V, W> Bfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn new(graph: &'a Graph<V, W>, start: Option<usize>) -> Self {
        let mut visited = VisitedFlags::new(graph.vertex_count());
        let mut queue = Queue::new();
        if let Some(s) = start {
            visited.try_visit(s);
            queue.enqueue((s, 0));
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, V, W> Iterator for Bfs<'a, V, W> {
    type Item = (&'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (u, depth) = self.queue.dequeue()?;
        for &v in &self.graph.adjacency[u] {
            if self.visited.try_visit(v) {
                self.queue.enqueue((v, depth + 1));
            }
        }
        Some((&self.graph.vertices[u], depth))
    }
}

/// Depth-first iterator yielding `(vertex, depth)` pairs in pre-order.
///
/// Visits vertices in the same order a recursive DFS would, using an explicit
/// stack of `(vertex, depth, next neighbor)` frames.
pub struct Dfs<'a, V, W> {
    graph: &'a Graph<V, W>,
    visited: VisitedFlags,
    stack: Vec<(usize, usize, usize)>,
    start: Option<usize>,
}

impl<'a, V, W> Dfs<'a, V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn new(graph: &'a Graph<V, W>, start: Option<usize>) -> Self {
        Self {
            graph,
            visited: VisitedFlags::new(graph.vertex_count()),
            stack: Vec::new(),
            start,
        }
    }
}

impl<'a, V, W> Iterator for Dfs<'a, V, W> {
    type Item = (&'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(s) = self.start.take() {
            self.visited.try_visit(s);
            self.stack.push((s, 0, 0));
            return Some((&self.graph.vertices[s], 0));
        }
        loop {
            let (u, depth, cursor) = self.stack.last_mut()?;
            match self.graph.adjacency[*u].get(*cursor) {
                Some(&v) => {
                    *cursor += 1;
                    if self.visited.try_visit(v) {
                        let d = *depth + 1;
                        self.stack.push((v, d, 0));
                        return Some((&self.graph.vertices[v], d));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    /// Breadth-first iterator from `start`; empty for unknown vertices.
    pub fn bfs_iter(&self, start: &V) -> Bfs<'_, V, W> {
        Bfs::new(self, self.position(start))
    }

    /// Depth-first iterator from `start`; empty for unknown vertices.
    pub fn dfs_iter(&self, start: &V) -> Dfs<'_, V, W> {
        Dfs::new(self, self.position(start))
    }

    /// Calls `visit(vertex, depth)` for each vertex reachable from `start`,
    /// in breadth-first order.
    pub fn bfs<F>(&self, start: &V, mut visit: F)
    where
        F: FnMut(&V, usize),
    {
        for (v, depth) in self.bfs_iter(start) {
            visit(v, depth);
        }
    }

    /// Calls `visit(vertex, depth)` for each vertex reachable from `start`,
    /// in depth-first pre-order.
    pub fn dfs<F>(&self, start: &V, mut visit: F)
    where
        F: FnMut(&V, usize),
    {
        for (v, depth) in self.dfs_iter(start) {
            visit(v, depth);
        }
    }

    /// Returns a path with the fewest edges from `start` to `end`.
    ///
    /// `Some(vec![start])` when `start == end`; `None` if either vertex is
    /// unknown or `end` is unreachable.
    pub fn find_shortest_path(&self, start: &V, end: &V) -> Option<Vec<V>> {
        let s = self.position(start)?;
        let e = self.position(end)?;
        if s == e {
            return Some(vec![self.vertices[s].clone()]);
        }

        let mut parent: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut visited = VisitedFlags::new(self.vertex_count());
        let mut queue = Queue::new();
        visited.try_visit(s);
        queue.enqueue(s);

        while let Some(u) = queue.dequeue() {
            for &v in &self.adjacency[u] {
                if !visited.try_visit(v) {
                    continue;
                }
                parent[v] = Some(u);
                if v == e {
                    let mut path = vec![e];
                    let mut cur = e;
                    while let Some(p) = parent[cur] {
                        path.push(p);
                        cur = p;
                    }
                    path.reverse();
                    return Some(path.into_iter().map(|i| self.vertices[i].clone()).collect());
                }
                queue.enqueue(v);
            }
        }
        None
    }

    /// Enumerates every simple path from `start` to `end` with at most
    /// `max_depth` edges, in depth-first discovery order.
    ///
    /// Backtracking runs on an explicit stack of neighbor cursors, one per
    /// vertex on the current path, so deep searches do not grow the call stack.
    pub fn find_all_paths(&self, start: &V, end: &V, max_depth: usize) -> Vec<Vec<V>> {
        let (Some(s), Some(e)) = (self.position(start), self.position(end)) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        let mut path = vec![s];
        if s == e {
            found.push(self.keys_of(&path));
            return found;
        }

        let mut on_path = VisitedFlags::new(self.vertex_count());
        on_path.try_visit(s);
        let mut cursors = vec![0usize];

        while let Some(cursor) = cursors.last_mut() {
            let Some(&u) = path.last() else {
                break;
            };
            let next = if path.len() > max_depth {
                None
            } else {
                self.adjacency[u].get(*cursor).copied()
            };
            let Some(v) = next else {
                cursors.pop();
                if let Some(done) = path.pop() {
                    on_path.unmark(done);
                }
                continue;
            };
            *cursor += 1;
            if !on_path.try_visit(v) {
                continue;
            }
            path.push(v);
            if v == e {
                found.push(self.keys_of(&path));
                path.pop();
                on_path.unmark(v);
            } else {
                cursors.push(0);
            }
        }
        found
    }

    /// [`find_all_paths`](Self::find_all_paths) with the configured
    /// `max_path_depth`.
    pub fn find_all_paths_default(&self, start: &V, end: &V) -> Vec<Vec<V>> {
        self.find_all_paths(start, end, self.max_path_depth)
    }

    fn keys_of(&self, positions: &[usize]) -> Vec<V> {
        positions.iter().map(|&i| self.vertices[i].clone()).collect()
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Directed graphs look for a back edge to a vertex on the current DFS
    /// stack. Undirected graphs look for an edge to an already visited vertex
    /// other than the DFS parent. A self-loop is a cycle in both.
    pub fn has_cycle(&self) -> bool {
        if self.directed {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        }
    }

    fn has_directed_cycle(&self) -> bool {
        const UNSEEN: u8 = 0;
        const ON_STACK: u8 = 1;
        const DONE: u8 = 2;

        let n = self.vertex_count();
        let mut state = vec![UNSEEN; n];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if state[root] != UNSEEN {
                continue;
            }
            state[root] = ON_STACK;
            stack.push((root, 0));
            while let Some((u, cursor)) = stack.last_mut() {
                let Some(&v) = self.adjacency[*u].get(*cursor) else {
                    state[*u] = DONE;
                    stack.pop();
                    continue;
                };
                *cursor += 1;
                match state[v] {
                    ON_STACK => return true,
                    UNSEEN => {
                        state[v] = ON_STACK;
                        stack.push((v, 0));
                    }
                    _ => {}
                }
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let n = self.vertex_count();
        let mut visited = VisitedFlags::new(n);
        let mut stack: Vec<(usize, Option<usize>, usize)> = Vec::new();

        for root in 0..n {
            if !visited.try_visit(root) {
                continue;
            }
            stack.push((root, None, 0));
            while let Some((u, parent, cursor)) = stack.last_mut() {
                let Some(&v) = self.adjacency[*u].get(*cursor) else {
                    stack.pop();
                    continue;
                };
                *cursor += 1;
                if Some(v) == *parent {
                    continue;
                }
                if !visited.try_visit(v) {
                    return true;
                }
                let u = *u;
                stack.push((v, Some(u), 0));
            }
        }
        false
    }

    /// Groups vertices into connected components, treating every edge as
    /// undirected (weak components for directed graphs).
    ///
    /// Components are ordered by their earliest vertex in enumeration order;
    /// vertices within a component are in breadth-first discovery order.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let n = self.vertex_count();
        let incoming = if self.directed {
            let mut incoming = vec![Vec::new(); n];
            for (u, nbrs) in self.adjacency.iter().enumerate() {
                for &v in nbrs {
                    incoming[v].push(u);
                }
            }
            incoming
        } else {
            Vec::new()
        };

        let mut visited = VisitedFlags::new(n);
        let mut components = Vec::new();
        let mut queue = Queue::new();

        for root in 0..n {
            if !visited.try_visit(root) {
                continue;
            }
            let mut component = Vec::new();
            queue.enqueue(root);
            while let Some(u) = queue.dequeue() {
                component.push(self.vertices[u].clone());
                let back = incoming.get(u).map_or(&[][..], Vec::as_slice);
                for &v in self.adjacency[u].iter().chain(back) {
                    if visited.try_visit(v) {
                        queue.enqueue(v);
                    }
                }
            }
            components.push(component);
        }
        components
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy + Zero,
{
    /// Dense `n x n` weight matrix in enumeration order, `W::zero()` where
    /// no edge exists.
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<W>> {
        let n = self.vertex_count();
        let mut matrix = vec![vec![W::zero(); n]; n];
        for (&(u, v), &w) in &self.weights {
            matrix[u][v] = w;
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str> {
        let mut g = Graph::undirected();
        g.add_edge("A", "B");
        g.add_edge("A", "C");
        g.add_edge("B", "D");
        g.add_edge("C", "D");
        g.add_edge("D", "E");
        g
    }

    #[test]
    fn test_bfs_depths() {
        let g = diamond();
        let mut seen = Vec::new();
        g.bfs(&"A", |v, d| seen.push((*v, d)));
        assert_eq!(seen, vec![("A", 0), ("B", 1), ("C", 1), ("D", 2), ("E", 3)]);
    }

    #[test]
    fn test_dfs_pre_order() {
        let g = diamond();
        let order: Vec<_> = g.dfs_iter(&"A").map(|(v, d)| (*v, d)).collect();
        assert_eq!(order, vec![("A", 0), ("B", 1), ("D", 2), ("C", 3), ("E", 3)]);
    }

    #[test]
    fn test_traversal_from_unknown_start() {
        let g = diamond();
        let mut calls = 0;
        g.bfs(&"Z", |_, _| calls += 1);
        g.dfs(&"Z", |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_shortest_path() {
        let g = diamond();
        assert_eq!(g.find_shortest_path(&"A", &"E"), Some(vec!["A", "B", "D", "E"]));
        assert_eq!(g.find_shortest_path(&"C", &"C"), Some(vec!["C"]));
        assert_eq!(g.find_shortest_path(&"A", &"Z"), None);

        let mut h = g.clone();
        h.add_vertex("island");
        assert_eq!(h.find_shortest_path(&"A", &"island"), None);
    }

    #[test]
    fn test_all_paths_respects_depth() {
        let g = diamond();
        let paths = g.find_all_paths(&"A", &"D", 10);
        assert_eq!(paths, vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]);
        assert!(g.find_all_paths(&"A", &"D", 1).is_empty());
        assert_eq!(g.find_all_paths(&"A", &"A", 0), vec![vec!["A"]]);
        assert_eq!(g.find_all_paths_default(&"A", &"E").len(), 2);
    }

    #[test]
    fn test_all_paths_on_long_chain() {
        let mut chain: Graph<u32> = Graph::directed();
        for v in 0..100_000 {
            chain.add_edge(v, v + 1);
        }
        let paths = chain.find_all_paths(&0, &100_000, usize::MAX);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 100_001);
        assert!(chain.find_all_paths(&0, &100_000, 99_999).is_empty());
        assert_eq!(chain.find_all_paths(&0, &100_000, 100_000).len(), 1);
    }

    #[test]
    fn test_all_paths_with_branching_cycles() {
        let mut g: Graph<char> = Graph::undirected();
        g.add_edge('a', 'b');
        g.add_edge('b', 'c');
        g.add_edge('c', 'a');
        g.add_edge('c', 'd');
        assert_eq!(
            g.find_all_paths(&'a', &'d', 10),
            vec![vec!['a', 'b', 'c', 'd'], vec!['a', 'c', 'd']]
        );
        assert_eq!(g.find_all_paths(&'a', &'d', 2), vec![vec!['a', 'c', 'd']]);
    }

    #[test]
    fn test_cycles() {
        let mut dag: Graph<u8> = Graph::directed();
        dag.add_edge(1, 2);
        dag.add_edge(1, 3);
        dag.add_edge(2, 3);
        assert!(!dag.has_cycle());
        dag.add_edge(3, 1);
        assert!(dag.has_cycle());

        let mut path: Graph<u8> = Graph::undirected();
        path.add_edge(1, 2);
        path.add_edge(2, 3);
        assert!(!path.has_cycle());
        path.add_edge(3, 1);
        assert!(path.has_cycle());

        let mut looped: Graph<u8> = Graph::undirected();
        looped.add_edge(7, 7);
        assert!(looped.has_cycle());
    }

    #[test]
    fn test_connected_components() {
        let mut g: Graph<u8> = Graph::directed();
        g.add_edge(1, 2);
        g.add_edge(3, 2);
        g.add_edge(4, 5);
        g.add_vertex(6);
        assert_eq!(
            g.connected_components(),
            vec![vec![1, 2, 3], vec![4, 5], vec![6]]
        );
    }

    #[test]
    fn test_adjacency_matrix() {
        let mut g: Graph<char, u32> = Graph::directed();
        g.add_weighted_edge('a', 'b', 3);
        g.add_weighted_edge('b', 'c', 5);
        assert_eq!(
            g.to_adjacency_matrix(),
            vec![vec![0, 3, 0], vec![0, 0, 5], vec![0, 0, 0]]
        );
    }
}
