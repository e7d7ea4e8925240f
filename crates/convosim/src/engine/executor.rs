//! Execution engine for convolution pipeline runs.
//!
//! ## Purpose
//!
//! This module orchestrates one pipeline run: it derives the effective
//! kernel from the operation mode, performs the padded convolution under the
//! configured boundary policy, and applies optional range clipping. It is the
//! central component coordinating the lower layers.
//!
//! ## Design notes
//!
//! * **Pure**: Each run is a pure function of its inputs; no state persists
//!   between invocations and re-running with the same inputs is idempotent.
//! * **Synchronous**: All work is CPU-only over interactive-tiny grids;
//!   there is no suspension, cancellation, or concurrency.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * The stage order is fixed: kernel derivation, convolution, clipping.
//! * Clipping runs only when a clip range is configured.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`, called
//!   from the API layer).
//! * This module does not render results (see `engine::output` and
//!   `math::format`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::clip::{ClipRange, clip_grid};
use crate::algorithms::convolve::convolve;
use crate::engine::output::ConvolutionResult;
use crate::math::boundary::BoundaryPolicy;
use crate::math::kernel::{OperationMode, build_kernel};
use crate::primitives::grid::Grid;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionConfig<T> {
    /// Boundary policy for out-of-range sampling.
    pub boundary: BoundaryPolicy,

    /// Operation mode selecting kernel derivation.
    pub mode: OperationMode,

    /// Sharpening strength for `UnsharpMask` mode.
    pub alpha: T,

    /// Optional output clipping range (`None` disables clipping).
    pub clip: Option<ClipRange>,
}

impl<T: Float> Default for ConvolutionConfig<T> {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::default(),
            mode: OperationMode::default(),
            alpha: T::from(0.4).unwrap(),
            clip: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for convolution pipeline runs.
pub struct ConvolutionExecutor;

impl ConvolutionExecutor {
    /// Run the pipeline: derive the kernel, convolve, and optionally clip.
    ///
    /// Inputs are assumed validated by the caller.
    pub fn run_with_config<T: Float>(
        image: &Grid<T>,
        base_kernel: &Grid<T>,
        config: &ConvolutionConfig<T>,
    ) -> ConvolutionResult<T> {
        let kernel = build_kernel(base_kernel, config.mode, config.alpha);

        let (padded, raw) = convolve(image, &kernel, config.boundary);

        let output = match config.clip {
            Some(range) => {
                let (low, high) = range.bounds();
                clip_grid(&raw, low, high)
            }
            None => raw,
        };

        ConvolutionResult {
            pad_rows: kernel.rows() / 2,
            pad_cols: kernel.cols() / 2,
            padded,
            kernel,
            output,
        }
    }
}
