#![cfg(feature = "dev")]
//! Tests for the rectangular grid primitive.
//!
//! These tests verify the `Grid` type used throughout the pipeline for:
//! - Checked construction from nested rows and row-major buffers
//! - Rejection of empty and jagged input
//! - Cell access, row slicing, and cell-wise mapping
//!
//! ## Test Organization
//!
//! 1. **Construction** - Valid grids from rows, vectors, and fills
//! 2. **Validation** - Empty, jagged, and mismatched inputs
//! 3. **Accessors** - Indexing, rows, and mapping

use convosim::internals::primitives::errors::ConvosimError;
use convosim::internals::primitives::grid::Grid;

// ============================================================================
// Construction Tests
// ============================================================================

/// Valid nested rows produce a grid with the expected shape and values.
#[test]
fn test_from_rows_valid() {
    let grid = Grid::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
        .expect("valid grid");

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(grid.get(0, 2), 3.0);
    assert_eq!(grid.get(1, 0), 4.0);
}

/// A row-major buffer with matching dimensions builds a grid.
#[test]
fn test_from_vec_valid() {
    let grid = Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid grid");

    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.get(1, 1), 4.0);
}

/// `filled` produces a constant grid of the requested shape.
#[test]
fn test_filled() {
    let grid = Grid::filled(3, 4, 7.5).expect("valid grid");

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    assert!(grid.data().iter().all(|&v| v == 7.5));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Zero rows or zero columns are rejected.
#[test]
fn test_empty_grids_rejected() {
    assert_eq!(
        Grid::<f64>::from_rows(vec![]),
        Err(ConvosimError::EmptyGrid)
    );
    assert_eq!(
        Grid::<f64>::from_rows(vec![vec![]]),
        Err(ConvosimError::EmptyGrid)
    );
    assert_eq!(
        Grid::from_vec(0, 3, Vec::<f64>::new()),
        Err(ConvosimError::EmptyGrid)
    );
    assert_eq!(
        Grid::<f64>::filled(2, 0, 1.0),
        Err(ConvosimError::EmptyGrid)
    );
}

/// Unequal row lengths report the offending row with context.
#[test]
fn test_jagged_grid_rejected() {
    let result = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);

    assert_eq!(
        result,
        Err(ConvosimError::JaggedGrid {
            row: 1,
            expected: 2,
            got: 3,
        })
    );
}

/// A buffer whose length does not match the declared shape is rejected.
#[test]
fn test_from_vec_size_mismatch() {
    let result = Grid::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0]);

    assert_eq!(
        result,
        Err(ConvosimError::SizeMismatch {
            expected: 6,
            actual: 4,
        })
    );
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Row slices view the underlying row-major storage.
#[test]
fn test_row_slices() {
    let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid grid");

    assert_eq!(grid.row(0), &[1.0, 2.0]);
    assert_eq!(grid.row(1), &[3.0, 4.0]);
}

/// `map` builds a new grid without touching the original.
#[test]
fn test_map_produces_new_grid() {
    let grid = Grid::from_rows(vec![vec![1.0, -2.0]]).expect("valid grid");
    let doubled = grid.map(|v| v * 2.0);

    assert_eq!(doubled.data(), &[2.0, -4.0]);
    assert_eq!(grid.data(), &[1.0, -2.0]);
}
