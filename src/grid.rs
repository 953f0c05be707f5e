//! Resizable colour grid with symmetric-padding growth.

use crate::error::SimulationError;
use ndarray::{s, Array2, ArrayView2};

/// 2D array of colour indices in `[0, n_colours)`.
///
/// Cells start at colour 0. Dimensions only ever grow; growth pads the array
/// symmetrically and shifts every stored coordinate by the padding amount.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<u32>,
    n_colours: u32,
}

impl Grid {
    /// Create a zeroed grid.
    ///
    /// `n_colours` is the modulus for colour advancement and must be at
    /// least 1; a ruleset always has one action per colour.
    pub fn new(height: usize, width: usize, n_colours: u32) -> Self {
        debug_assert!(n_colours >= 1, "colour cycle must have at least one colour");
        Self {
            cells: Array2::zeros((height, width)),
            n_colours,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Current `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// True iff `(i, j)` lies within current bounds
    #[inline]
    pub fn contains(&self, i: i64, j: i64) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.height() && (j as usize) < self.width()
    }

    /// Colour stored at `(i, j)`
    pub fn colour_at(&self, i: i64, j: i64) -> Result<u32, SimulationError> {
        if self.contains(i, j) {
            Ok(self.cells[(i as usize, j as usize)])
        } else {
            Err(self.out_of_bounds(i, j))
        }
    }

    /// Advance the colour at `(i, j)` one step around the cycle.
    ///
    /// This is the only operation that mutates cell values, which keeps
    /// every stored value below `n_colours`.
    pub fn advance_colour(&mut self, i: i64, j: i64) -> Result<(), SimulationError> {
        if !self.contains(i, j) {
            return Err(self.out_of_bounds(i, j));
        }
        let cell = &mut self.cells[(i as usize, j as usize)];
        *cell = (*cell + 1) % self.n_colours;
        Ok(())
    }

    /// Pad the grid by `padding` zeroed cells on every side.
    ///
    /// Returns the `(row, column)` offset every previously stored coordinate
    /// has shifted by, so the caller can translate tracked positions in the
    /// same operation.
    pub fn grow(&mut self, padding: usize) -> (i64, i64) {
        let (height, width) = self.cells.dim();
        let mut grown = Array2::zeros((height + 2 * padding, width + 2 * padding));
        grown
            .slice_mut(s![padding..padding + height, padding..padding + width])
            .assign(&self.cells);
        self.cells = grown;
        (padding as i64, padding as i64)
    }

    /// Read-only view of the backing array
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    /// Cell count per colour index
    pub fn colour_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.n_colours as usize];
        for &cell in self.cells.iter() {
            counts[cell as usize] += 1;
        }
        counts
    }

    fn out_of_bounds(&self, i: i64, j: i64) -> SimulationError {
        SimulationError::OutOfBounds {
            i,
            j,
            height: self.height(),
            width: self.width(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zeroed() {
        let grid = Grid::new(4, 6, 2);
        assert_eq!(grid.dimensions(), (4, 6));
        for i in 0..4 {
            for j in 0..6 {
                assert_eq!(grid.colour_at(i, j).unwrap(), 0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least one colour")]
    fn test_zero_colour_grid_rejected() {
        Grid::new(1, 1, 0);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(3, 3, 2);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(2, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(3, 0));
        assert!(!grid.contains(0, 3));
    }

    #[test]
    fn test_colour_at_out_of_bounds() {
        let grid = Grid::new(3, 3, 2);
        assert_eq!(
            grid.colour_at(3, 1),
            Err(SimulationError::OutOfBounds {
                i: 3,
                j: 1,
                height: 3,
                width: 3
            })
        );
    }

    #[test]
    fn test_advance_colour_wraps() {
        let mut grid = Grid::new(3, 3, 3);
        for expected in [1, 2, 0, 1] {
            grid.advance_colour(1, 1).unwrap();
            assert_eq!(grid.colour_at(1, 1).unwrap(), expected);
        }
    }

    #[test]
    fn test_grow_shifts_content() {
        let mut grid = Grid::new(3, 3, 2);
        grid.advance_colour(1, 2).unwrap();

        let offset = grid.grow(2);
        assert_eq!(offset, (2, 2));
        assert_eq!(grid.dimensions(), (7, 7));

        // Old content moved by the offset, new border is colour 0
        assert_eq!(grid.colour_at(3, 4).unwrap(), 1);
        assert_eq!(grid.colour_at(1, 2).unwrap(), 0);
        assert_eq!(grid.colour_at(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_colour_counts() {
        let mut grid = Grid::new(2, 2, 2);
        grid.advance_colour(0, 0).unwrap();
        grid.advance_colour(1, 1).unwrap();
        assert_eq!(grid.colour_counts(), vec![2, 2]);
    }
}
