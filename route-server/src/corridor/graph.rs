//! Named waypoint graphs and shortest-path search.
//!
//! A corridor graph is a small set of named nodes with undirected edges.
//! Edges are stored in both directions for O(1) neighbour lookup, and
//! weighted by haversine distance between their endpoints.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use crate::domain::Coord;

/// A named waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub key: &'static str,
    pub coord: Coord,
}

/// An immutable corridor graph.
#[derive(Debug, Clone, Default)]
pub struct CorridorGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<&'static str, usize>,
    /// Adjacency by node index: (neighbour index, distance km).
    adjacency: Vec<Vec<(usize, f64)>>,
}

/// Dijkstra frontier entry, ordered so `BinaryHeap` pops the smallest cost.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl CorridorGraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, key: &str) -> Option<&GraphNode> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether `a` and `b` share an edge.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.adjacency[ia].iter().any(|(n, _)| *n == ib),
            _ => false,
        }
    }

    /// The node closest to `target` and its distance in km.
    pub fn nearest(&self, target: &Coord) -> Option<(&GraphNode, f64)> {
        self.nodes
            .iter()
            .map(|n| (n, n.coord.distance_km(target)))
            .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(Ordering::Equal))
    }

    /// The node closest to `target`, if it lies within `max_km`.
    pub fn nearest_within(&self, target: &Coord, max_km: f64) -> Option<(&GraphNode, f64)> {
        self.nearest(target).filter(|(_, d)| *d <= max_km)
    }

    /// Shortest node path between two keys (inclusive), with its length in km.
    ///
    /// Returns `None` if either key is unknown or the nodes are disconnected.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<(Vec<&GraphNode>, f64)> {
        let start = *self.index.get(from)?;
        let goal = *self.index.get(to)?;

        let mut dist = vec![f64::INFINITY; self.nodes.len()];
        let mut prev: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut heap = BinaryHeap::new();

        dist[start] = 0.0;
        heap.push(Frontier {
            cost: 0.0,
            node: start,
        });

        while let Some(Frontier { cost, node }) = heap.pop() {
            if node == goal {
                break;
            }
            if cost > dist[node] {
                continue;
            }
            for &(next, weight) in &self.adjacency[node] {
                let candidate = cost + weight;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    prev[next] = Some(node);
                    heap.push(Frontier {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        if !dist[goal].is_finite() {
            trace!(from, to, "no corridor path");
            return None;
        }

        let mut path = vec![goal];
        let mut cursor = goal;
        while let Some(p) = prev[cursor] {
            path.push(p);
            cursor = p;
        }
        path.reverse();

        Some((path.into_iter().map(|i| &self.nodes[i]).collect(), dist[goal]))
    }
}

/// Builder for corridor graphs.
///
/// Invalid coordinates and edges naming unknown nodes are skipped, so a
/// typo in a static table degrades the graph rather than aborting startup.
#[derive(Debug, Default)]
pub struct CorridorGraphBuilder {
    inner: CorridorGraph,
}

impl CorridorGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `[lon, lat]`.
    pub fn node(mut self, key: &'static str, lon: f64, lat: f64) -> Self {
        let Ok(coord) = Coord::new(lon, lat) else {
            return self;
        };
        if self.inner.index.contains_key(key) {
            return self;
        }
        self.inner.index.insert(key, self.inner.nodes.len());
        self.inner.nodes.push(GraphNode { key, coord });
        self.inner.adjacency.push(Vec::new());
        self
    }

    /// Add an undirected edge weighted by haversine distance.
    pub fn edge(mut self, a: &str, b: &str) -> Self {
        let (Some(&ia), Some(&ib)) = (self.inner.index.get(a), self.inner.index.get(b)) else {
            return self;
        };
        if ia == ib || self.inner.adjacency[ia].iter().any(|(n, _)| *n == ib) {
            return self;
        }
        let weight = self.inner.nodes[ia]
            .coord
            .distance_km(&self.inner.nodes[ib].coord);
        self.inner.adjacency[ia].push((ib, weight));
        self.inner.adjacency[ib].push((ia, weight));
        self
    }

    pub fn build(self) -> CorridorGraph {
        self.inner
    }
}
