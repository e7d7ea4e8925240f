//! Padded "same"-size 2D convolution.
//!
//! ## Purpose
//!
//! This module is the algorithmic heart of the crate: it slides the effective
//! kernel over every cell of the image, sampling past the edges according to
//! the boundary policy, and produces an output grid with the image's
//! dimensions. It also materializes the padded input grid that the
//! presentation layer renders next to the output.
//!
//! ## Design notes
//!
//! * **Orientation**: The kernel is applied in its given orientation, without
//!   the flip of mathematical convolution. For symmetric kernels this is
//!   indistinguishable; for asymmetric kernels it keeps cell weights where
//!   the user wrote them. This is a cross-correlation in textbook terms.
//! * **Summation order**: The accumulator runs kernel rows outer, columns
//!   inner. Floating-point addition is not associative, so this order is part
//!   of the observable contract and any parallel rewrite must reproduce it
//!   bit for bit.
//! * **Oversized kernels**: A kernel larger than the image is well defined
//!   via boundary sampling and is not rejected.
//!
//! ## Invariants
//!
//! * `output` has exactly the image's dimensions ("same"-size convolution).
//! * `padded` has dimensions `rows + 2 * (kernel.rows / 2)` by
//!   `cols + 2 * (kernel.cols / 2)`.
//!
//! ## Non-goals
//!
//! * This module does not derive the kernel (see `math::kernel`).
//! * This module does not clip the output (see `algorithms::clip`).
//! * No FFT, tiling, or SIMD: intended grids are interactive-tiny.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::boundary::{BoundaryPolicy, pad, sample};
use crate::primitives::grid::Grid;

// ============================================================================
// Convolution
// ============================================================================

/// Convolve `image` with `kernel` under the given boundary policy.
///
/// Returns the padded input grid and the "same"-size output grid. The
/// padding amounts are `kernel.rows / 2` and `kernel.cols / 2` (floor).
pub fn convolve<T: Float>(
    image: &Grid<T>,
    kernel: &Grid<T>,
    policy: BoundaryPolicy,
) -> (Grid<T>, Grid<T>) {
    let pad_rows = kernel.rows() / 2;
    let pad_cols = kernel.cols() / 2;

    let padded = pad(image, pad_rows, pad_cols, policy);

    let mut data = Vec::with_capacity(image.rows() * image.cols());
    for r in 0..image.rows() {
        for c in 0..image.cols() {
            let mut acc = T::zero();
            // Fixed order: kernel rows outer, columns inner.
            for i in 0..kernel.rows() {
                for j in 0..kernel.cols() {
                    let src_r = r as isize + i as isize - pad_rows as isize;
                    let src_c = c as isize + j as isize - pad_cols as isize;
                    acc = acc + kernel.get(i, j) * sample(image, src_r, src_c, policy);
                }
            }
            data.push(acc);
        }
    }

    let output = Grid::from_parts(image.rows(), image.cols(), data);
    (padded, output)
}
