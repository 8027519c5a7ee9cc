// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The tabulating seam finder
//!
//! Solves the seam problem directly on the grid, no graph in sight:
//! one O(width × height) sweep filling a cost-plus-backpointer table
//! column by column, then a backward walk to recover the seam.
//! Structurally specialized to the one-step-per-column movement
//! pattern, and asymptotically better than the graph search for it.
//!
//! Ties are broken toward the smaller line index: candidate
//! predecessors are scanned in ascending order and only a strictly
//! smaller cost displaces the current best.

use crate::cq;
use crate::grid::{EnergyAndBackPointer, Grid};
use crate::seamfinder::SeamFinder;
use num_traits::Float;
use tracing::debug;

// Fill the table left to right.  Cell (x, y) holds the least
// cumulative energy of any path from column 0 ending at (x, y), and
// the row that path came from in column x - 1.
fn tabulate<P>(energy: &Grid<P>) -> Grid<EnergyAndBackPointer<P>>
where
    P: Float + Default,
{
    let (width, height) = (energy.width, energy.height);
    let mut target: Grid<EnergyAndBackPointer<P>> = Grid::new(width, height);

    // Populate the first column with their native energies.
    for y in 0..height {
        target[(0, y)].energy = energy[(0, y)];
    }

    let maxheight = height - 1;
    for x in 1..width {
        for y in 0..height {
            let erg = energy[(x, y)];
            let mut best = EnergyAndBackPointer {
                energy: P::infinity(),
                parent: 0,
            };
            for yp in cq!(y == 0, 0, y - 1)..=cq!(y == maxheight, maxheight, y + 1) {
                let candidate = target[(x - 1, yp)].energy + erg;
                if candidate < best.energy {
                    best = EnergyAndBackPointer {
                        energy: candidate,
                        parent: yp,
                    };
                }
            }
            target[(x, y)] = best;
        }
    }

    target
}

/// Given an energy grid, return the list of y-coordinates that, when
/// zipped with the range (0..width), give the XY coordinates for each
/// cell in the minimum-energy left-to-right seam.
pub fn energy_to_horizontal_seam<P>(energy: &Grid<P>) -> Vec<u32>
where
    P: Float + Default,
{
    let (width, height) = (energy.width, energy.height);
    let target = tabulate(energy);

    // Find the y coordinate of the rightmost cell with the least
    // cumulative energy.
    let mut best = P::infinity();
    let mut seam_row = 0;
    for y in 0..height {
        let candidate = target[(width - 1, y)].energy;
        if candidate < best {
            best = candidate;
            seam_row = y;
        }
    }

    // Working backwards, generate a vec of y coordinates that map to
    // the seam, reverse and return.
    (0..width)
        .rev()
        .fold(Vec::with_capacity(width as usize), |mut acc, x| {
            acc.push(seam_row);
            seam_row = target[(x, seam_row)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Given an energy grid, return the list of x-coordinates of the
/// minimum-energy top-to-bottom seam, one per row.  Computed by
/// transposing the grid and reusing the horizontal tabulation; the
/// transpose swaps the axis roles, so the result is already in
/// per-row order.
pub fn energy_to_vertical_seam<P>(energy: &Grid<P>) -> Vec<u32>
where
    P: Float + Default,
{
    energy_to_horizontal_seam(&energy.transposed())
}

/// Finds seams by dynamic programming over the grid itself.
pub struct DynamicProgrammingSeamFinder;

impl SeamFinder for DynamicProgrammingSeamFinder {
    fn find_horizontal_seam(&self, energies: &Grid<f64>) -> Vec<u32> {
        let seam = energy_to_horizontal_seam(energies);
        debug!(length = seam.len(), "horizontal seam tabulated");
        seam
    }

    fn find_vertical_seam(&self, energies: &Grid<f64>) -> Vec<u32> {
        let seam = energy_to_vertical_seam(energies);
        debug!(length = seam.len(), "vertical seam tabulated");
        seam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Row-major 5x4 fixture; zeros trace out one cheap connected
    // path in each direction.
    const ENERGY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn fixture() -> Grid<f64> {
        Grid::from_fn(5, 4, |x, y| f64::from(ENERGY_DATA[(y * 5 + x) as usize]))
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let expected = [2, 3, 4, 3];
        assert_eq!(energy_to_vertical_seam(&fixture()), expected);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let expected = [0, 1, 0, 1, 2];
        assert_eq!(energy_to_horizontal_seam(&fixture()), expected);
    }

    #[test]
    fn two_by_two_horizontal_seam() {
        let energies = Grid::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(
            DynamicProgrammingSeamFinder.find_horizontal_seam(&energies),
            vec![0, 0]
        );
    }

    #[test]
    fn single_cell_grid() {
        let energies = Grid::from_columns(&[vec![9.0]]);
        assert_eq!(DynamicProgrammingSeamFinder.find_horizontal_seam(&energies), vec![0]);
        assert_eq!(DynamicProgrammingSeamFinder.find_vertical_seam(&energies), vec![0]);
    }

    #[test]
    fn single_column_grid_picks_the_cheapest_row() {
        let energies = Grid::from_columns(&[vec![5.0, 3.0, 7.0]]);
        assert_eq!(DynamicProgrammingSeamFinder.find_horizontal_seam(&energies), vec![1]);
        assert_eq!(
            DynamicProgrammingSeamFinder.find_vertical_seam(&energies),
            vec![0, 0, 0]
        );
    }

    #[test]
    fn ties_break_toward_the_smaller_row() {
        // Every path costs the same; the seam must hug row 0.
        let energies = Grid::from_fn(4, 3, |_, _| 1.0);
        assert_eq!(
            DynamicProgrammingSeamFinder.find_horizontal_seam(&energies),
            vec![0, 0, 0, 0]
        );
    }

    #[test]
    fn tabulates_f32_grids_too() {
        let energies: Grid<f32> = Grid::from_columns(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(energy_to_horizontal_seam(&energies), vec![0, 0]);
    }
}
