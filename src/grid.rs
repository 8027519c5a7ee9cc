// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional storage
//!
//! The rectangular field all the seam algorithms read from and write
//! to: the caller's energy grid, and the cost-plus-backpointer table
//! built during the dynamic programming pass.  The content type only
//! has to be `Default + Copy`, so the same structure serves both.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  Immutable once handed to a
/// seam finder; the finders allocate their own `Grid`s for working
/// state and never touch the input.
#[derive(Debug, Clone)]
pub struct Grid<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A new grid with every cell set to the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// A new grid populated by a function of the cell coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut grid = Grid::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            grid[(x, y)] = f(x, y);
        }
        grid
    }

    /// A new grid built from column slices, one vector per x
    /// coordinate.  This is the column-major `energies[x][y]`
    /// convention most seam-carving literature uses, so fixtures
    /// written that way transcribe directly.
    pub fn from_columns(columns: &[Vec<P>]) -> Self {
        let width = columns.len() as u32;
        let height = columns[0].len() as u32;
        Grid::from_fn(width, height, |x, y| columns[x as usize][y as usize])
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// A copy of the grid with the axes swapped: cell (x, y) of the
    /// result is cell (y, x) of the original.  Vertical seams are
    /// found by transposing and reusing the horizontal machinery.
    pub fn transposed(&self) -> Grid<P> {
        Grid::from_fn(self.height, self.width, |x, y| self[(y, x)])
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// One cell of the dynamic programming table: the cumulative energy
/// of the best path reaching this cell, and the line index of the
/// predecessor cell that achieved it.
#[derive(Default, Debug, Copy, Clone)]
pub struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
