// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Minimum-energy seam finding over a 2D energy grid, two ways: a
//! generic Dijkstra engine run over the grid presented as an implicit
//! graph, and a direct dynamic-programming tabulation.  Both answer
//! the same [`SeamFinder`] contract; which one you reach for is a
//! question of reuse versus speed.
//!
//! The crate starts where the energy grid starts.  Decoding images,
//! computing energy functions, and carving the seams back out are the
//! caller's business.

mod ternary;

pub mod dpseam;
pub mod graph;
pub mod graphseam;
pub mod grid;
pub mod minpq;
pub mod seamfinder;
pub mod seamgraph;
pub mod shortestpath;

pub use dpseam::{energy_to_horizontal_seam, energy_to_vertical_seam, DynamicProgrammingSeamFinder};
pub use graph::{Edge, Graph};
pub use graphseam::DijkstraSeamFinder;
pub use grid::Grid;
pub use minpq::{EmptyQueue, MinPq, NaiveMinPq};
pub use seamfinder::{horizontal_seam_energy, vertical_seam_energy, SeamFinder};
pub use seamgraph::{HorizontalSeamGraph, Node, VerticalSeamGraph};
pub use shortestpath::{
    extract_shortest_path, find_shortest_path, find_shortest_path_with, shortest_path_tree,
    ShortestPath, ShortestPathTree,
};
