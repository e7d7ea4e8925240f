#![cfg(feature = "dev")]
//! Tests for the padded "same"-size 2D convolution.
//!
//! These tests verify the sliding-window computation:
//! - Output dimensions always match the image
//! - Impulse and zero kernels behave as identities and annihilators
//! - Boundary policies shape the edge contributions
//! - The kernel is applied unflipped (cross-correlation orientation)
//! - Oversized kernels are handled via padding, not rejected
//!
//! ## Test Organization
//!
//! 1. **Dimension Contracts** - Output and padded-grid shapes
//! 2. **Kernel Identities** - Impulse, zero, and centered-identity kernels
//! 3. **Boundary Behavior** - ZeroFill vs ReplicateEdge contributions
//! 4. **Orientation** - Asymmetric kernels expose the no-flip contract
//! 5. **Worked Fixtures** - Hand-computed regression values

use approx::assert_relative_eq;

use convosim::internals::algorithms::convolve::convolve;
use convosim::internals::math::boundary::BoundaryPolicy;
use convosim::internals::primitives::grid::Grid;

// ============================================================================
// Dimension Contract Tests
// ============================================================================

/// Output dimensions equal the image dimensions for any kernel size.
#[test]
fn test_output_dimensions_match_image() {
    let image = Grid::filled(4, 5, 1.0).expect("valid grid");

    for (kr, kc) in [(1, 1), (3, 3), (2, 4), (5, 1)] {
        let kernel = Grid::filled(kr, kc, 0.5).expect("valid grid");
        let (padded, output) = convolve(&image, &kernel, BoundaryPolicy::ZeroFill);

        assert_eq!(output.rows(), 4);
        assert_eq!(output.cols(), 5);
        assert_eq!(padded.rows(), 4 + 2 * (kr / 2));
        assert_eq!(padded.cols(), 5 + 2 * (kc / 2));
    }
}

// ============================================================================
// Kernel Identity Tests
// ============================================================================

/// A 1x1 kernel `[[1.0]]` reproduces the image exactly under either policy.
#[test]
fn test_impulse_kernel_invariance() {
    let image = Grid::from_rows(vec![vec![1.5, -2.0, 0.25], vec![1.0 / 3.0, 0.0, 9.0]])
        .expect("valid grid");
    let kernel = Grid::from_rows(vec![vec![1.0]]).expect("valid grid");

    for policy in [BoundaryPolicy::ZeroFill, BoundaryPolicy::ReplicateEdge] {
        let (padded, output) = convolve(&image, &kernel, policy);
        assert_eq!(output, image);
        assert_eq!(padded, image); // padding amount 0
    }
}

/// An all-zero kernel of any size yields an all-zero output.
#[test]
fn test_zero_kernel_annihilates() {
    let image = Grid::from_rows(vec![vec![3.0, 7.0], vec![-1.0, 4.5]]).expect("valid grid");

    for (kr, kc) in [(1, 1), (3, 3), (2, 2), (5, 3)] {
        let kernel = Grid::filled(kr, kc, 0.0).expect("valid grid");
        for policy in [BoundaryPolicy::ZeroFill, BoundaryPolicy::ReplicateEdge] {
            let (_, output) = convolve(&image, &kernel, policy);
            assert!(output.data().iter().all(|&v| v == 0.0));
        }
    }
}

/// A centered 3x3 identity kernel reproduces the image; the padded grid
/// gains a one-cell zero border.
#[test]
fn test_centered_identity_kernel() {
    let image = Grid::filled(3, 3, 1.0).expect("valid grid");
    let kernel = Grid::from_rows(vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("valid grid");

    let (padded, output) = convolve(&image, &kernel, BoundaryPolicy::ZeroFill);

    assert_eq!(output, image);
    assert_eq!(padded.rows(), 5);
    assert_eq!(padded.cols(), 5);
    assert_eq!(padded.row(0), &[0.0; 5]);
    assert_eq!(padded.row(2), &[0.0, 1.0, 1.0, 1.0, 0.0]);
}

// ============================================================================
// Boundary Behavior Tests
// ============================================================================

/// For a single-cell image under ReplicateEdge, every sample clamps to that
/// cell, so the output is the cell value times the kernel sum.
#[test]
fn test_replicate_edge_single_cell_sums_kernel() {
    let v = 7.0;
    let image = Grid::from_rows(vec![vec![v]]).expect("valid grid");
    let kernel = Grid::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .expect("valid grid");

    let (_, output) = convolve(&image, &kernel, BoundaryPolicy::ReplicateEdge);

    let kernel_sum: f64 = kernel.data().iter().sum();
    assert_relative_eq!(output.get(0, 0), v * kernel_sum);
}

/// A kernel larger than the image is well defined via padding.
#[test]
fn test_kernel_larger_than_image() {
    let image = Grid::from_rows(vec![vec![1.0]]).expect("valid grid");
    let kernel = Grid::filled(3, 3, 1.0).expect("valid grid");

    let (_, zero_fill) = convolve(&image, &kernel, BoundaryPolicy::ZeroFill);
    assert_eq!(zero_fill.get(0, 0), 1.0); // only the center sample is in range

    let (_, replicate) = convolve(&image, &kernel, BoundaryPolicy::ReplicateEdge);
    assert_eq!(replicate.get(0, 0), 9.0); // all nine samples clamp to the cell
}

// ============================================================================
// Orientation Tests
// ============================================================================

/// The kernel is applied in its given orientation: a weight right of center
/// reads the sample right of the output cell. A flipped (true mathematical)
/// convolution would read the sample to the left instead.
#[test]
fn test_kernel_is_not_flipped() {
    let image = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid grid");
    let kernel = Grid::from_rows(vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("valid grid");

    let (_, output) = convolve(&image, &kernel, BoundaryPolicy::ZeroFill);

    assert_eq!(output.get(0, 0), 2.0);
    assert_eq!(output.get(0, 1), 0.0);
    assert_eq!(output.get(1, 0), 4.0);
    assert_eq!(output.get(1, 1), 0.0);
}

// ============================================================================
// Worked Fixture Tests
// ============================================================================

/// 2x2 box-sum over an all-ones 2x2 image under ZeroFill: each output cell
/// counts the in-range samples of its window.
///
/// With `ph = pw = 1`, cell (r, c) sums samples at rows r-1..r and columns
/// c-1..c; samples off the top/left read zero.
#[test]
fn test_box_sum_fixture() {
    let image = Grid::filled(2, 2, 1.0).expect("valid grid");
    let kernel = Grid::filled(2, 2, 1.0).expect("valid grid");

    let (padded, output) = convolve(&image, &kernel, BoundaryPolicy::ZeroFill);

    assert_eq!(output.row(0), &[1.0, 2.0]);
    assert_eq!(output.row(1), &[2.0, 4.0]);

    assert_eq!(padded.rows(), 4);
    assert_eq!(padded.cols(), 4);
    assert_eq!(padded.row(0), &[0.0; 4]);
    assert_eq!(padded.row(1), &[0.0, 1.0, 1.0, 0.0]);
}

/// The same box-sum under ReplicateEdge sees every sample as 1.
#[test]
fn test_box_sum_replicate_edge() {
    let image = Grid::filled(2, 2, 1.0).expect("valid grid");
    let kernel = Grid::filled(2, 2, 1.0).expect("valid grid");

    let (_, output) = convolve(&image, &kernel, BoundaryPolicy::ReplicateEdge);

    assert!(output.data().iter().all(|&v| v == 4.0));
}
