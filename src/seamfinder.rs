use crate::grid::Grid;

/// This trait defines how we will return seams from an energy grid.
/// It's a primitive interface, just enough to make room for multiple
/// seam finding strategies.  A seam finder is a pure function of the
/// grid it is handed; it keeps no state between calls.
pub trait SeamFinder {
    /// Request a horizontal seam: one row index per column, adjacent
    /// entries never more than one row apart.
    fn find_horizontal_seam(&self, energies: &Grid<f64>) -> Vec<u32>;

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self, energies: &Grid<f64>) -> Vec<u32>;
}

/// The total energy along a horizontal seam.
pub fn horizontal_seam_energy(energies: &Grid<f64>, seam: &[u32]) -> f64 {
    seam.iter()
        .enumerate()
        .map(|(x, &y)| energies[(x as u32, y)])
        .sum()
}

/// The total energy along a vertical seam.
pub fn vertical_seam_energy(energies: &Grid<f64>, seam: &[u32]) -> f64 {
    seam.iter()
        .enumerate()
        .map(|(y, &x)| energies[(x, y as u32)])
        .sum()
}
