//! Output types and result structures for pipeline runs.
//!
//! ## Purpose
//!
//! This module defines the `ConvolutionResult` struct which carries all
//! outputs from one pipeline run: the padded input grid, the effective
//! kernel actually applied, and the output grid, plus the padding geometry
//! the presentation layer needs to distinguish added padding cells from
//! original image cells.
//!
//! ## Design notes
//!
//! * **Value semantics**: The result owns its grids; nothing is borrowed
//!   from the inputs and nothing is mutated after the run.
//! * **Ergonomics**: Implements `Display`, rendering every cell through the
//!   smart formatter so exact fractions stay readable.
//!
//! ## Key concepts
//!
//! * **Padding geometry**: `pad_rows`/`pad_cols` are the kernel half-sizes;
//!   whether a padded-grid coordinate is added padding is a pure
//!   coordinate-range fact exposed by `is_padding`.
//!
//! ## Invariants
//!
//! * `output` has the input image's dimensions.
//! * `padded` has dimensions `output.rows + 2 * pad_rows` by
//!   `output.cols + 2 * pad_cols`.
//! * `kernel` has the base kernel's dimensions.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not decide colors or layout for rendered cells.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::format::format_value;
use crate::primitives::grid::Grid;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of one convolution pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionResult<T> {
    /// Input image surrounded by boundary padding.
    pub padded: Grid<T>,

    /// Effective kernel actually applied (after mode derivation).
    pub kernel: Grid<T>,

    /// Convolution output, same dimensions as the input image.
    pub output: Grid<T>,

    /// Rows of padding added above and below the image.
    pub pad_rows: usize,

    /// Columns of padding added left and right of the image.
    pub pad_cols: usize,
}

impl<T: Float> ConvolutionResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether coordinate `(r, c)` of the padded grid is added padding
    /// rather than an original image cell.
    pub fn is_padding(&self, r: usize, c: usize) -> bool {
        r < self.pad_rows
            || r >= self.padded.rows() - self.pad_rows
            || c < self.pad_cols
            || c >= self.padded.cols() - self.pad_cols
    }

    /// Render a single grid cell through the smart formatter.
    pub fn format_cell(grid: &Grid<T>, r: usize, c: usize) -> String {
        format_value(grid.get(r, c))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float> Display for ConvolutionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Image:   {}x{}",
            self.output.rows(),
            self.output.cols()
        )?;
        writeln!(
            f,
            "  Kernel:  {}x{}",
            self.kernel.rows(),
            self.kernel.cols()
        )?;
        writeln!(f, "  Padding: {}x{}", self.pad_rows, self.pad_cols)?;
        writeln!(f)?;

        write_grid(f, "Padded Input:", &self.padded)?;
        writeln!(f)?;
        write_grid(f, "Effective Kernel:", &self.kernel)?;
        writeln!(f)?;
        write_grid(f, "Output:", &self.output)
    }
}

/// Write a titled grid with right-aligned, smart-formatted cells.
fn write_grid<T: Float>(f: &mut Formatter<'_>, title: &str, grid: &Grid<T>) -> Result {
    let cells: Vec<String> = grid.data().iter().map(|&v| format_value(v)).collect();
    let width = cells.iter().map(|s| s.len()).max().unwrap_or(1);

    writeln!(f, "{title}")?;
    for r in 0..grid.rows() {
        write!(f, " ")?;
        for c in 0..grid.cols() {
            write!(f, " {:>width$}", cells[r * grid.cols() + c])?;
        }
        writeln!(f)?;
    }
    Ok(())
}
