//! Square grid storage and flat-index helpers.
//!
//! Cells are stored row-major: `(x, y)` lives at `y * dim + x`.

use crate::error::SmoothError;

/// Calculate the flat index for a 2D coordinate.
#[inline]
pub fn index_of(dim: usize, x: usize, y: usize) -> usize {
    y * dim + x
}

/// Recover `(x, y)` from a flat index. Inverse of [`index_of`] for `a < dim * dim`.
#[inline]
pub fn coords_of(dim: usize, a: usize) -> (usize, usize) {
    let y = a / dim;
    (a - y * dim, y)
}

/// Check if signed coordinates fall inside a `dim x dim` grid.
#[inline]
pub fn in_bounds(dim: usize, x: isize, y: isize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < dim && (y as usize) < dim
}

/// An owned square grid of `f32` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dim: usize,
    cells: Vec<f32>,
}

impl Grid {
    /// Zero-filled grid with side length `dim`.
    pub fn new(dim: usize) -> Self {
        Grid {
            dim,
            cells: vec![0.0; dim * dim],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(dim: usize, cells: Vec<f32>) -> Result<Self, SmoothError> {
        if dim == 0 {
            return Err(SmoothError::EmptyGrid);
        }
        let expected = dim * dim;
        if cells.len() != expected {
            return Err(SmoothError::GridSizeMismatch {
                dim,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Grid { dim, cells })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(dim: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut cells = Vec::with_capacity(dim * dim);
        for y in 0..dim {
            for x in 0..dim {
                cells.push(f(x, y));
            }
        }
        Grid { dim, cells }
    }

    /// The benchmark input: cell `(x, y)` holds `x + y`.
    ///
    /// Away from the edges the box filter reproduces this ramp exactly, which
    /// makes outputs easy to sanity-check.
    pub fn diagonal_ramp(dim: usize) -> Self {
        Self::from_fn(dim, |x, y| (x + y) as f32)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [f32] {
        &mut self.cells
    }

    pub fn into_cells(self) -> Vec<f32> {
        self.cells
    }

    /// Get a cell value, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.dim && y < self.dim {
            Some(self.cells[index_of(self.dim, x, y)])
        } else {
            None
        }
    }

    /// Set a cell value. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if x < self.dim && y < self.dim {
            let idx = index_of(self.dim, x, y);
            self.cells[idx] = value;
        }
    }
}
