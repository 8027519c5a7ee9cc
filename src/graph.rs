// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The implicit graph capability
//!
//! The shortest-path engine only ever asks one question of a graph:
//! "what edges leave this vertex?"  Anything that can answer it is a
//! graph, whether the edges live in an adjacency list or are
//! generated on demand from a grid.  The engine stores nothing about
//! the graph itself, which is what lets the seam graphs stay implicit
//! instead of materializing millions of edges up front.

use std::hash::Hash;

/// A directed, weighted edge.  Equality is structural: two edges with
/// the same endpoints but different weights are different edges.
/// Weights must be non-negative; the engine's correctness argument
/// assumes it and nothing checks it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Edge { from, to, weight }
    }
}

/// The single capability the engine consumes.  Implementations must
/// be deterministic and side-effect free: the engine may ask for the
/// same vertex's edges any number of times.
pub trait Graph {
    type Vertex: Copy + Eq + Hash;

    /// Every edge leaving `vertex`, in any order.
    fn outgoing_edges_from(&self, vertex: Self::Vertex) -> Vec<Edge<Self::Vertex>>;
}
