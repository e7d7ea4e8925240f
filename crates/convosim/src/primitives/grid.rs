//! Rectangular value grids.
//!
//! ## Purpose
//!
//! This module defines `Grid<T>`, the rectangular table of real values that
//! every stage of the pipeline consumes and produces: the input image, the
//! base and effective kernels, the padded image, and the output.
//!
//! ## Design notes
//!
//! * **Immutable**: Grids are never mutated after construction; every
//!   transformation builds a new grid.
//! * **Row-major**: Cells are stored in a single `Vec<T>` in row-major order.
//! * **Checked construction**: Public constructors reject empty and jagged
//!   inputs so downstream code can assume a well-formed rectangle.
//!
//! ## Invariants
//!
//! * `rows >= 1` and `cols >= 1`.
//! * `data.len() == rows * cols`; every row has exactly `cols` cells.
//!
//! ## Non-goals
//!
//! * This module does not parse cell text (the caller supplies parsed reals).
//! * This module does not provide in-place mutation or resizing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ConvosimError;

// ============================================================================
// Grid
// ============================================================================

/// Immutable rectangular table of values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a grid from nested rows, rejecting empty and jagged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ConvosimError> {
        if rows.is_empty() {
            return Err(ConvosimError::EmptyGrid);
        }

        let cols = rows[0].len();
        if cols == 0 {
            return Err(ConvosimError::EmptyGrid);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ConvosimError::JaggedGrid {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Build a grid from a row-major cell vector with checked dimensions.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ConvosimError> {
        if rows == 0 || cols == 0 {
            return Err(ConvosimError::EmptyGrid);
        }

        let expected = rows * cols;
        if data.len() != expected {
            return Err(ConvosimError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { rows, cols, data })
    }

    /// Build a grid from parts known to be consistent.
    ///
    /// Internal constructor for transformation code that produces its own
    /// row-major buffer with dimensions fixed by construction.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell storage.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Borrow a single row as a slice.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }
}

impl<T: Copy> Grid<T> {
    /// Cell value at `(r, c)`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        assert!(r < self.rows && c < self.cols, "grid index out of bounds");
        self.data[r * self.cols + c]
    }

    /// Build a new grid by applying `f` to every cell.
    pub fn map<F>(&self, f: F) -> Grid<T>
    where
        F: Fn(T) -> T,
    {
        let data = self.data.iter().map(|&v| f(v)).collect();
        Grid::from_parts(self.rows, self.cols, data)
    }
}

impl<T: Clone> Grid<T> {
    /// Build a grid filled with a single value.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, ConvosimError> {
        if rows == 0 || cols == 0 {
            return Err(ConvosimError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }
}
