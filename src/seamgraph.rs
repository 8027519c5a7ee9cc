// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The energy grid as an implicit graph
//!
//! Adapters that present a [`Grid<f64>`] to the shortest-path engine
//! as a directed acyclic graph whose minimum-weight source-to-sink
//! path is exactly a minimum-energy seam.  Two synthetic sentinel
//! vertices reduce the many-starts/many-ends problem to a single
//! source and a single target, so the engine needs no special
//! casing.
//!
//! The weight convention: an edge leaving a real pixel carries that
//! pixel's own energy, and edges out of the source carry zero.  Every
//! pixel a path visits therefore contributes its energy exactly once,
//! through its outgoing edge.

use crate::cq;
use crate::graph::{Edge, Graph};
use crate::grid::Grid;

/// A vertex of the seam graph: one of the two sentinels, or a real
/// grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Source,
    Sink,
    Pixel(u32, u32),
}

impl Node {
    /// The grid coordinate, if this is a real cell.
    pub fn pixel(self) -> Option<(u32, u32)> {
        match self {
            Node::Pixel(x, y) => Some((x, y)),
            _ => None,
        }
    }
}

/// The left-to-right seam graph: the source fans into column 0, each
/// cell reaches the three row-adjacent cells of the next column, and
/// the last column fans into the sink.
pub struct HorizontalSeamGraph<'a> {
    pub energies: &'a Grid<f64>,
}

impl<'a> Graph for HorizontalSeamGraph<'a> {
    type Vertex = Node;

    fn outgoing_edges_from(&self, vertex: Node) -> Vec<Edge<Node>> {
        let (width, height) = (self.energies.width, self.energies.height);
        let mut edges = Vec::new();
        match vertex {
            Node::Source => {
                for y in 0..height {
                    edges.push(Edge::new(vertex, Node::Pixel(0, y), 0.0));
                }
            }
            Node::Pixel(x, y) if x < width - 1 => {
                let maxheight = height - 1;
                let weight = self.energies[(x, y)];
                for ny in cq!(y == 0, 0, y - 1)..=cq!(y == maxheight, maxheight, y + 1) {
                    edges.push(Edge::new(vertex, Node::Pixel(x + 1, ny), weight));
                }
            }
            Node::Pixel(x, y) => {
                edges.push(Edge::new(vertex, Node::Sink, self.energies[(x, y)]));
            }
            Node::Sink => {}
        }
        edges
    }
}

/// The top-to-bottom seam graph, the transpose of the horizontal one:
/// rows and columns swap roles.
pub struct VerticalSeamGraph<'a> {
    pub energies: &'a Grid<f64>,
}

impl<'a> Graph for VerticalSeamGraph<'a> {
    type Vertex = Node;

    fn outgoing_edges_from(&self, vertex: Node) -> Vec<Edge<Node>> {
        let (width, height) = (self.energies.width, self.energies.height);
        let mut edges = Vec::new();
        match vertex {
            Node::Source => {
                for x in 0..width {
                    edges.push(Edge::new(vertex, Node::Pixel(x, 0), 0.0));
                }
            }
            Node::Pixel(x, y) if y < height - 1 => {
                let maxwidth = width - 1;
                let weight = self.energies[(x, y)];
                for nx in cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1) {
                    edges.push(Edge::new(vertex, Node::Pixel(nx, y + 1), weight));
                }
            }
            Node::Pixel(x, y) => {
                edges.push(Edge::new(vertex, Node::Sink, self.energies[(x, y)]));
            }
            Node::Sink => {}
        }
        edges
    }
}
