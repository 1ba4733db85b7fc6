//! `PriceComparisonGraph` - store offers for farm inputs, linked by price gap.
//!
//! Every offer is a vertex keyed `"{store_id}-{input_id}"`. Connecting an
//! input joins every pair of its offers with an undirected edge weighted by
//! the absolute price difference, so neighbors of an offer are the
//! alternatives for the same input and edge weights rank how close they are.

use crate::graph::basic::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A store's price for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceNode {
    /// Store identifier.
    pub store_id: String,
    /// Store display name.
    pub store_name: String,
    /// Input (product) identifier.
    pub input_id: String,
    /// Offered price.
    pub price: f64,
}

impl PriceNode {
    /// Creates an offer.
    pub fn new(
        store_id: impl Into<String>,
        store_name: impl Into<String>,
        input_id: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            store_name: store_name.into(),
            input_id: input_id.into(),
            price,
        }
    }

    /// Vertex key, `"{store_id}-{input_id}"`.
    pub fn key(&self) -> String {
        price_key(&self.store_id, &self.input_id)
    }
}

fn price_key(store_id: &str, input_id: &str) -> String {
    format!("{store_id}-{input_id}")
}

/// An undirected price-difference graph over store offers.
///
/// Offers are kept in registration order; that order breaks price ties.
#[derive(Debug, Clone)]
pub struct PriceComparisonGraph {
    graph: Graph<String, f64>,
    nodes: Vec<PriceNode>,
    positions: HashMap<String, usize>,
}

impl PriceComparisonGraph {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self {
            graph: Graph::undirected(),
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Number of registered offers.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no offers were registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registers an offer and its vertex.
    ///
    /// Re-adding an offer with an existing key replaces it in place, keeping
    /// its position in registration order and its edges.
    pub fn add_store(&mut self, node: PriceNode) {
        let key = node.key();
        if let Some(&pos) = self.positions.get(&key) {
            trace_event!(key = %key, price = node.price, "price node replaced");
            self.nodes[pos] = node;
            return;
        }
        trace_event!(key = %key, price = node.price, "price node added");
        self.positions.insert(key.clone(), self.nodes.len());
        self.graph.add_vertex(key);
        self.nodes.push(node);
    }

    /// Offers registered for `input_id`, in registration order.
    pub fn stores_for_input(&self, input_id: &str) -> Vec<&PriceNode> {
        self.nodes.iter().filter(|n| n.input_id == input_id).collect()
    }

    /// Connects every pair of offers for `input_id` with an edge weighted by
    /// their absolute price difference.
    ///
    /// Returns the number of pairs connected. Existing edges are reweighted.
    pub fn connect_stores_by_same_input(&mut self, input_id: &str) -> usize {
        let offers: Vec<(String, f64)> = self
            .stores_for_input(input_id)
            .into_iter()
            .map(|n| (n.key(), n.price))
            .collect();

        let mut pairs = 0;
        for (i, (a, price_a)) in offers.iter().enumerate() {
            for (b, price_b) in &offers[i + 1..] {
                self.graph
                    .add_weighted_edge(a.clone(), b.clone(), (price_a - price_b).abs());
                pairs += 1;
            }
        }
        trace_event!(input_id, pairs, "connected offers");
        pairs
    }

    /// The `limit` cheapest offers for `input_id`, ascending by price.
    ///
    /// Equal prices keep registration order.
    pub fn find_best_prices(&self, input_id: &str, limit: usize) -> Vec<&PriceNode> {
        let mut offers = self.stores_for_input(input_id);
        offers.sort_by(|a, b| a.price.total_cmp(&b.price));
        offers.truncate(limit);
        offers
    }

    /// Lowest and highest price offered for `input_id`.
    pub fn price_range(&self, input_id: &str) -> Option<(f64, f64)> {
        self.stores_for_input(input_id).into_iter().fold(None, |range, n| match range {
            None => Some((n.price, n.price)),
            Some((lo, hi)) => Some((lo.min(n.price), hi.max(n.price))),
        })
    }

    /// Offer registered under `key`.
    pub fn node(&self, key: &str) -> Option<&PriceNode> {
        self.positions.get(key).map(|&pos| &self.nodes[pos])
    }

    /// Connected alternatives to the offer of `store_id` for `input_id`,
    /// closest price first.
    pub fn alternatives(&self, store_id: &str, input_id: &str) -> Vec<(&PriceNode, f64)> {
        let key = price_key(store_id, input_id);
        let mut alternatives: Vec<(&PriceNode, f64)> = self
            .graph
            .neighbors(&key)
            .into_iter()
            .filter_map(|other| {
                let weight = self.graph.edge_weight(&key, other)?;
                Some((self.node(other)?, weight))
            })
            .collect();
        alternatives.sort_by(|a, b| a.1.total_cmp(&b.1));
        alternatives
    }

    /// Borrows the underlying graph.
    pub fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }
}

impl Default for PriceComparisonGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> PriceComparisonGraph {
        let mut g = PriceComparisonGraph::new();
        g.add_store(PriceNode::new("s1", "North Agro", "seed", 50.0));
        g.add_store(PriceNode::new("s2", "Valley Supply", "seed", 30.0));
        g.add_store(PriceNode::new("s3", "Farm Depot", "seed", 40.0));
        g.add_store(PriceNode::new("s1", "North Agro", "urea", 12.0));
        g
    }

    #[test]
    fn test_best_prices_ascending() {
        let g = seeds();
        let best: Vec<_> = g.find_best_prices("seed", 2).iter().map(|n| n.price).collect();
        assert_eq!(best, vec![30.0, 40.0]);
        assert_eq!(g.find_best_prices("seed", 10).len(), 3);
        assert!(g.find_best_prices("seed", 0).is_empty());
        assert!(g.find_best_prices("water", 3).is_empty());
    }

    #[test]
    fn test_best_prices_ties_keep_order() {
        let mut g = PriceComparisonGraph::new();
        g.add_store(PriceNode::new("b", "B", "x", 10.0));
        g.add_store(PriceNode::new("a", "A", "x", 10.0));
        g.add_store(PriceNode::new("c", "C", "x", 5.0));
        let ids: Vec<_> = g
            .find_best_prices("x", 3)
            .iter()
            .map(|n| n.store_id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_connect_same_input() {
        let mut g = seeds();
        assert_eq!(g.connect_stores_by_same_input("seed"), 3);
        assert_eq!(g.connect_stores_by_same_input("urea"), 0);
        assert_eq!(g.graph().edge_count(), 3);
        assert_eq!(
            g.graph().edge_weight(&"s1-seed".to_owned(), &"s2-seed".to_owned()),
            Some(20.0)
        );
        assert!(!g.graph().has_edge(&"s1-seed".to_owned(), &"s1-urea".to_owned()));

        let alts: Vec<_> = g
            .alternatives("s1", "seed")
            .iter()
            .map(|(n, w)| (n.store_id.as_str(), *w))
            .collect();
        assert_eq!(alts, vec![("s3", 10.0), ("s2", 20.0)]);
    }

    #[test]
    fn test_readd_replaces_in_place() {
        let mut g = seeds();
        g.add_store(PriceNode::new("s1", "North Agro", "seed", 25.0));
        assert_eq!(g.len(), 4);
        assert_eq!(g.node("s1-seed").map(|n| n.price), Some(25.0));
        assert_eq!(g.price_range("seed"), Some((25.0, 40.0)));
        assert_eq!(g.price_range("none"), None);
        assert_eq!(g.graph().vertex_count(), 4);
    }

    #[test]
    fn test_price_node_json_uses_camel_case() {
        let node = PriceNode::new("s9", "Hill Co", "lime", 7.5);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["storeId"], "s9");
        assert_eq!(json["inputId"], "lime");
        let back: PriceNode = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }
}
