// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Dijkstra's algorithm over the graph capability
//!
//! The label-setting shortest-path engine.  It consumes a [`Graph`]
//! and a [`MinPq`] and produces a shortest-path tree: the predecessor
//! edge and best distance for every vertex settled before the target.
//! Path extraction walks that tree backward and reverses.  The graph
//! is only ever queried through `outgoing_edges_from`, so it can be
//! implicit and effectively unbounded; the search touches only what
//! it can reach before the target is finalized.

use crate::graph::{Edge, Graph};
use crate::minpq::{MinPq, NaiveMinPq};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::trace;

/// The outcome of a shortest-path query.  A closed sum: callers
/// branch on all three, and "no path" is a value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortestPath<V> {
    /// Start and end were the same vertex; the path has no edges.
    SingleVertex(V),
    /// An ordered edge sequence from start to end.
    Success(Vec<Edge<V>>),
    /// The end vertex is unreachable from the start.
    Failure,
}

impl<V> ShortestPath<V> {
    pub fn exists(&self) -> bool {
        match self {
            ShortestPath::Failure => false,
            _ => true,
        }
    }

    /// The path's edges in traversal order.  Empty for the
    /// single-vertex and failure cases.
    pub fn edges(&self) -> &[Edge<V>] {
        match self {
            ShortestPath::Success(edges) => edges,
            _ => &[],
        }
    }

    /// The sum of the path's edge weights, or `None` if no path
    /// exists.
    pub fn total_weight(&self) -> Option<f64> {
        match self {
            ShortestPath::SingleVertex(_) => Some(0.0),
            ShortestPath::Success(edges) => Some(edges.iter().map(|e| e.weight).sum()),
            ShortestPath::Failure => None,
        }
    }
}

/// The raw output of the search: for every vertex reached, the edge
/// used on the best path to it, and the distance along that path.
/// Following `edge_to` origins from any recorded vertex terminates at
/// the start vertex.
#[derive(Debug)]
pub struct ShortestPathTree<V> {
    edge_to: HashMap<V, Edge<V>>,
    dist_to: HashMap<V, f64>,
}

impl<V: Copy + Eq + Hash> ShortestPathTree<V> {
    /// The predecessor edge on the best known path to `vertex`.
    pub fn edge_to(&self, vertex: V) -> Option<&Edge<V>> {
        self.edge_to.get(&vertex)
    }

    /// The best known distance from the start to `vertex`.
    pub fn distance_to(&self, vertex: V) -> Option<f64> {
        self.dist_to.get(&vertex).copied()
    }
}

/// Run the label-setting search from `start`, stopping early once
/// `end` is finalized.  The early stop is safe because extractions
/// come off the frontier in non-decreasing distance order under
/// non-negative weights.
pub fn shortest_path_tree<G, Q>(
    graph: &G,
    start: G::Vertex,
    end: G::Vertex,
) -> ShortestPathTree<G::Vertex>
where
    G: Graph,
    Q: MinPq<G::Vertex> + Default,
{
    let mut tree = ShortestPathTree {
        edge_to: HashMap::new(),
        dist_to: HashMap::new(),
    };

    if start == end {
        return tree;
    }

    let mut known = HashSet::new();
    let mut pq = Q::default();

    known.insert(start);
    tree.dist_to.insert(start, 0.0);
    pq.insert(start, 0.0);

    while !pq.is_empty() {
        // The loop guard means the extraction cannot fail.
        let u = match pq.extract_min() {
            Ok(u) => u,
            Err(_) => break,
        };
        known.insert(u);
        if u == end {
            break;
        }
        let dist_u = tree.dist_to[&u];
        for edge in graph.outgoing_edges_from(u) {
            let w = edge.to;
            if known.contains(&w) {
                continue;
            }
            let candidate = dist_u + edge.weight;
            match tree.dist_to.get(&w).copied() {
                None => {
                    trace!(distance = candidate, "discovered vertex");
                    tree.dist_to.insert(w, candidate);
                    tree.edge_to.insert(w, edge);
                    pq.insert(w, candidate);
                }
                Some(current) if candidate < current => {
                    trace!(old = current, new = candidate, "relaxed vertex");
                    tree.dist_to.insert(w, candidate);
                    tree.edge_to.insert(w, edge);
                    pq.decrease_priority(&w, candidate);
                }
                Some(_) => {}
            }
        }
    }

    trace!(settled = known.len(), "search finished");
    tree
}

/// Turn a shortest-path tree into an ordered path from `start` to
/// `end`, walking the predecessor edges backward and reversing.
pub fn extract_shortest_path<V>(tree: &ShortestPathTree<V>, start: V, end: V) -> ShortestPath<V>
where
    V: Copy + Eq + Hash,
{
    if start == end {
        return ShortestPath::SingleVertex(start);
    }

    let mut edges = Vec::new();
    let mut curr = end;
    while curr != start {
        match tree.edge_to(curr) {
            Some(edge) => {
                edges.push(*edge);
                curr = edge.from;
            }
            // Absent from the tree means the search never reached it.
            None => return ShortestPath::Failure,
        }
    }

    edges.reverse();
    ShortestPath::Success(edges)
}

/// The full query with a caller-chosen frontier implementation.
pub fn find_shortest_path_with<G, Q>(
    graph: &G,
    start: G::Vertex,
    end: G::Vertex,
) -> ShortestPath<G::Vertex>
where
    G: Graph,
    Q: MinPq<G::Vertex> + Default,
{
    let tree = shortest_path_tree::<G, Q>(graph, start, end);
    extract_shortest_path(&tree, start, end)
}

/// The full query with the default frontier.
pub fn find_shortest_path<G>(graph: &G, start: G::Vertex, end: G::Vertex) -> ShortestPath<G::Vertex>
where
    G: Graph,
{
    find_shortest_path_with::<G, NaiveMinPq<G::Vertex>>(graph, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A stored-edge graph, the explicit counterpart to the implicit
    /// seam graphs.
    struct AdjacencyGraph {
        edges: Vec<Edge<u32>>,
    }

    impl AdjacencyGraph {
        fn new(triples: &[(u32, u32, f64)]) -> Self {
            AdjacencyGraph {
                edges: triples
                    .iter()
                    .map(|&(from, to, weight)| Edge::new(from, to, weight))
                    .collect(),
            }
        }
    }

    impl Graph for AdjacencyGraph {
        type Vertex = u32;

        fn outgoing_edges_from(&self, vertex: u32) -> Vec<Edge<u32>> {
            self.edges.iter().filter(|e| e.from == vertex).copied().collect()
        }
    }

    #[test]
    fn start_equals_end_is_single_vertex() {
        let graph = AdjacencyGraph::new(&[(0, 1, 1.0)]);
        let path = find_shortest_path(&graph, 0, 0);
        assert_eq!(path, ShortestPath::SingleVertex(0));
        assert!(path.edges().is_empty());
        assert_eq!(path.total_weight(), Some(0.0));
    }

    #[test]
    fn unreachable_target_is_failure() {
        let graph = AdjacencyGraph::new(&[(0, 1, 1.0), (2, 3, 1.0)]);
        let path = find_shortest_path(&graph, 0, 3);
        assert_eq!(path, ShortestPath::Failure);
        assert!(!path.exists());
        assert_eq!(path.total_weight(), None);
    }

    #[test]
    fn chooses_cheaper_multi_hop_route() {
        // Direct edge costs 5; the two-hop route costs 2.
        let graph = AdjacencyGraph::new(&[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0)]);
        let path = find_shortest_path(&graph, 0, 2);
        assert_eq!(
            path.edges(),
            &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)]
        );
        assert_eq!(path.total_weight(), Some(2.0));
    }

    #[test]
    fn relaxation_replaces_an_early_worse_discovery() {
        // Vertex 1 is discovered at distance 5 and must be relaxed
        // down to 2 once the route through vertex 2 is settled.
        let graph = AdjacencyGraph::new(&[(0, 1, 5.0), (0, 2, 1.0), (2, 1, 1.0)]);
        let path = find_shortest_path(&graph, 0, 1);
        assert_eq!(
            path.edges(),
            &[Edge::new(0, 2, 1.0), Edge::new(2, 1, 1.0)]
        );
        assert_eq!(path.total_weight(), Some(2.0));
    }

    #[test]
    fn finalized_vertex_keeps_its_distance_and_predecessor() {
        // Vertex 1 is settled at distance 1 before vertex 2 comes off
        // the frontier; the back edge 2 -> 1 then arrives at a
        // finalized vertex and must change nothing.  Searching for an
        // absent target forces every reachable vertex to settle.
        let graph = AdjacencyGraph::new(&[(0, 1, 1.0), (0, 2, 5.0), (1, 2, 1.0), (2, 1, 1.0)]);
        let tree = shortest_path_tree::<_, NaiveMinPq<u32>>(&graph, 0, 99);
        assert_eq!(tree.distance_to(1), Some(1.0));
        assert_eq!(tree.distance_to(2), Some(2.0));
        assert_eq!(tree.edge_to(1).map(|e| e.from), Some(0));
        assert_eq!(tree.edge_to(2).map(|e| e.from), Some(1));
    }

    #[test]
    fn path_edges_form_a_contiguous_chain() {
        let graph = AdjacencyGraph::new(&[
            (0, 1, 2.0),
            (1, 2, 2.0),
            (2, 3, 2.0),
            (0, 3, 9.0),
        ]);
        let path = find_shortest_path(&graph, 0, 3);
        let edges = path.edges();
        assert_eq!(edges.first().map(|e| e.from), Some(0));
        assert_eq!(edges.last().map(|e| e.to), Some(3));
        for pair in edges.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn extracted_path_weight_matches_recorded_distance() {
        let graph = AdjacencyGraph::new(&[
            (0, 1, 1.5),
            (1, 2, 0.5),
            (0, 2, 3.0),
            (2, 3, 1.0),
        ]);
        let tree = shortest_path_tree::<_, NaiveMinPq<u32>>(&graph, 0, 3);
        let path = extract_shortest_path(&tree, 0, 3);
        assert_eq!(path.total_weight(), tree.distance_to(3));
        assert_eq!(tree.distance_to(3), Some(3.0));
    }

    #[test]
    fn substitute_queue_produces_the_same_path() {
        let graph = AdjacencyGraph::new(&[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        let with_default = find_shortest_path(&graph, 0, 2);
        let with_explicit = find_shortest_path_with::<_, NaiveMinPq<u32>>(&graph, 0, 2);
        assert_eq!(with_default, with_explicit);
    }
}
