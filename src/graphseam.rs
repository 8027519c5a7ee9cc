// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The graph-based seam finder
//!
//! Composes the seam graph adapters with the Dijkstra engine: build
//! the implicit graph over the energies, search source to sink, and
//! read the seam off the path.  The final edge of the path enters the
//! sink and carries no coordinate, so only the pixel targets survive
//! the mapping.

use crate::grid::Grid;
use crate::seamfinder::SeamFinder;
use crate::seamgraph::{HorizontalSeamGraph, Node, VerticalSeamGraph};
use crate::shortestpath::find_shortest_path;
use tracing::debug;

/// Finds seams by running a generic shortest-path search over the
/// implicit seam graph.  Asymptotically worse than the tabulating
/// finder, but built entirely from reusable parts.
pub struct DijkstraSeamFinder;

impl SeamFinder for DijkstraSeamFinder {
    fn find_horizontal_seam(&self, energies: &Grid<f64>) -> Vec<u32> {
        let graph = HorizontalSeamGraph { energies };
        let path = find_shortest_path(&graph, Node::Source, Node::Sink);
        debug!(cost = ?path.total_weight(), "horizontal seam found");
        path.edges()
            .iter()
            .filter_map(|edge| edge.to.pixel())
            .map(|(_, y)| y)
            .collect()
    }

    fn find_vertical_seam(&self, energies: &Grid<f64>) -> Vec<u32> {
        let graph = VerticalSeamGraph { energies };
        let path = find_shortest_path(&graph, Node::Source, Node::Sink);
        debug!(cost = ?path.total_weight(), "vertical seam found");
        path.edges()
            .iter()
            .filter_map(|edge| edge.to.pixel())
            .map(|(x, _)| x)
            .collect()
    }
}
