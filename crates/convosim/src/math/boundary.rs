//! Boundary policies for out-of-range grid sampling.
//!
//! ## Purpose
//!
//! This module decides what value a windowed computation sees when it reads
//! past the edge of a grid. It provides both point sampling (used by the
//! convolution inner loop) and whole-grid padding (used to materialize the
//! padded input that the presentation layer renders).
//!
//! ## Design notes
//!
//! * **Strategy Pattern**: Uses the `BoundaryPolicy` enum to select the behavior.
//! * **Per-axis clamping**: Edge replication clamps row and column indices
//!   independently, so corner padding takes the nearest image corner value.
//! * **Allocation**: `pad` creates a new grid; input data is never modified.
//!
//! ## Key concepts
//!
//! * **ZeroFill**: Samples outside the grid read as zero.
//! * **ReplicateEdge**: Out-of-range coordinates clamp to the nearest edge
//!   coordinate, repeating edge values outward.
//!
//! ## Invariants
//!
//! * In-bounds coordinates return the stored cell value under every policy.
//! * `pad` preserves the original grid in the center of the padded range.
//!
//! ## Non-goals
//!
//! * This module does not choose padding amounts (derived from kernel
//!   dimensions by the convolution layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::grid::Grid;

// ============================================================================
// Boundary Policy
// ============================================================================

/// Policy for producing values outside a grid's real extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Treat samples outside the grid as zero.
    #[default]
    ZeroFill,

    /// Clamp out-of-range coordinates to the nearest edge coordinate.
    ReplicateEdge,
}

impl BoundaryPolicy {
    /// Get the name of the boundary policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::ZeroFill => "ZeroFill",
            BoundaryPolicy::ReplicateEdge => "ReplicateEdge",
        }
    }
}

// ============================================================================
// Sampling
// ============================================================================

/// Clamp a possibly-negative index into `[0, len - 1]`.
#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 {
        0
    } else {
        (i as usize).min(len - 1)
    }
}

/// Read the grid at `(row, col)`, resolving out-of-range coordinates
/// according to the boundary policy.
#[inline]
pub fn sample<T: Float>(grid: &Grid<T>, row: isize, col: isize, policy: BoundaryPolicy) -> T {
    let row_in = row >= 0 && (row as usize) < grid.rows();
    let col_in = col >= 0 && (col as usize) < grid.cols();

    if row_in && col_in {
        return grid.get(row as usize, col as usize);
    }

    match policy {
        BoundaryPolicy::ZeroFill => T::zero(),
        BoundaryPolicy::ReplicateEdge => grid.get(
            clamp_index(row, grid.rows()),
            clamp_index(col, grid.cols()),
        ),
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Surround a grid with `pad_rows` rows above/below and `pad_cols` columns
/// left/right, filled per the boundary policy.
pub fn pad<T: Float>(
    grid: &Grid<T>,
    pad_rows: usize,
    pad_cols: usize,
    policy: BoundaryPolicy,
) -> Grid<T> {
    if pad_rows == 0 && pad_cols == 0 {
        return grid.clone();
    }

    let out_rows = grid.rows() + 2 * pad_rows;
    let out_cols = grid.cols() + 2 * pad_cols;

    let mut data = Vec::with_capacity(out_rows * out_cols);
    for r in 0..out_rows {
        for c in 0..out_cols {
            let src_r = r as isize - pad_rows as isize;
            let src_c = c as isize - pad_cols as isize;
            data.push(sample(grid, src_r, src_c, policy));
        }
    }

    Grid::from_parts(out_rows, out_cols, data)
}
